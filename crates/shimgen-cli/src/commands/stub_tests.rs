use std::fs;
use std::path::Path;

use serde_json::json;
use shimgen_lib::{Config, LineEnding};

use super::stub::{StubArgs, stub};

fn args() -> StubArgs {
    StubArgs {
        path: None,
        lib_path: None,
        front_end: None,
        env_path: None,
        output: None,
        config: Config::new(),
    }
}

fn write_env(dir: &Path, origin: &str) -> std::path::PathBuf {
    let env = json!({
        "env": {
            "module:api": { "object": {
                "type": "object",
                "meta": { "kind": "module", "origin": origin },
                "properties": {
                    "get": { "type": {
                        "type": "object",
                        "meta": { "kind": "interface", "origin": origin },
                        "calls": [{ "parameters": [{ "name": "url" }] }]
                    }, "meta": { "origin": origin } }
                }
            } },
            "Object": { "object": { "type": "object", "meta": { "kind": "interface", "origin": ">lib.d.ts" } } }
        }
    });
    let env_path = dir.join("api.env.json");
    fs::write(&env_path, env.to_string()).unwrap();
    env_path
}

#[test]
fn stub_from_env_dump() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.d.ts");
    let env_path = write_env(dir.path(), &path.to_string_lossy());

    let mut args = args();
    args.env_path = Some(env_path);

    let output = stub(&args, &path).unwrap();
    assert_eq!(output, "var api = {};\r\napi.get = function (url) {};\r\n");
}

#[test]
fn stub_respects_line_ending() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.d.ts");
    let env_path = write_env(dir.path(), &path.to_string_lossy());

    let mut args = args();
    args.env_path = Some(env_path);
    args.config = Config::new().line_ending(LineEnding::Lf);

    let output = stub(&args, &path).unwrap();
    assert_eq!(output, "var api = {};\napi.get = function (url) {};\n");
}

#[test]
fn other_origin_yields_empty_stub() {
    let dir = tempfile::tempdir().unwrap();
    let env_path = write_env(dir.path(), "/elsewhere/api.d.ts");

    let mut args = args();
    args.env_path = Some(env_path);

    let output = stub(&args, &dir.path().join("api.d.ts")).unwrap();
    assert_eq!(output, "");
}

#[test]
fn missing_front_end_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = stub(&args(), &dir.path().join("api.d.ts")).unwrap_err();
    assert_eq!(err, "no front end configured (use --front-end or --env)");
}

#[test]
fn unreadable_env_dump_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args();
    args.env_path = Some(dir.path().join("missing.json"));

    let err = stub(&args, &dir.path().join("api.d.ts")).unwrap_err();
    assert!(err.starts_with("failed to read '"), "{err}");
}

#[test]
fn unsupported_shape_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.d.ts");
    let origin = path.to_string_lossy().into_owned();
    let env = json!({
        "env": { "s": { "object": { "type": "string-const", "meta": { "origin": origin } } } }
    });
    let env_path = dir.path().join("env.json");
    fs::write(&env_path, env.to_string()).unwrap();

    let mut args = args();
    args.env_path = Some(env_path);

    let err = stub(&args, &path).unwrap_err();
    assert!(
        err.starts_with("not yet implemented node kind `string-const` at `s`"),
        "{err}"
    );
}
