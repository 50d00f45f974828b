use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn workspace(smech: &str, bcc: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/smech_sectors.csv"), smech).unwrap();
    fs::write(dir.path().join("data/bcc_sectors.csv"), bcc).unwrap();
    dir
}

fn generator(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smech-nace-mapping"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_success_writes_dist() {
    let dir = workspace(
        "h\nWidgets,5,Widget Mfg,E1,E2,12\nGizmos,6,Gizmo Mfg,E1,E2,\n",
        "h\n12,_,_,a,a,,x,Widget Manufacture\n",
    );
    let output = generator(&dir).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping mapping for SMECH code 6 (Gizmos) - no BCC code"));
    assert!(dir.path().join("dist/naces.ts").exists());
    assert!(dir.path().join("dist/sectors.data.ts").exists());
}

#[test]
fn test_cli_explicit_outputs() {
    let dir = workspace("h\nWidgets,5,a,b,c,12\n", "h\n12,_,_,a,a,,x,Widgets\n");
    let output = generator(&dir)
        .args(["--output_bcc", "bcc.ts", "--output_benchmark", "bench.ts"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("bcc.ts").exists());
    assert!(dir.path().join("bench.ts").exists());
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_cli_failure_exit_code_and_message() {
    let dir = workspace("h\nWidgets,5,a,b,c,12\n", "h\n13,_,_,a,a,,x,Other\n");
    let output = generator(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SMECH code 5 maps to NACE 12 which is not in the BCC sector list"));
    assert!(stderr.contains("Suggestion"));
    assert!(!dir.path().join("dist").exists());
}

#[cfg(unix)]
#[test]
fn test_cli_formatter_failure_writes_nothing() {
    let dir = workspace("h\nWidgets,5,a,b,c,12\n", "h\n12,_,_,a,a,,x,Widgets\n");
    let output = generator(&dir)
        .args(["--prettier", "--prettier_cmd", "ls"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("dist").exists());
}

#[cfg(unix)]
#[test]
fn test_cli_formatter_from_settings_file() {
    let dir = workspace("h\nWidgets,5,a,b,c,12\n", "h\n12,_,_,a,a,,x,Widgets\n");
    fs::write(
        dir.path().join("generate.toml"),
        "[prettier]\nenabled = true\ncmd = \"sh -c cat\"\n\n[output]\nbenchmark = \"naces.ts\"\n",
    )
    .unwrap();

    let output = generator(&dir)
        .args(["--config", "generate.toml"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let naces = fs::read_to_string(dir.path().join("naces.ts")).unwrap();
    assert!(naces.contains(r#"{"5": "12"}"#));
    assert!(dir.path().join("dist/sectors.data.ts").exists());
}
