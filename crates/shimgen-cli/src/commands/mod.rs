pub mod front_end;
pub mod stub;

#[cfg(test)]
mod stub_tests;
