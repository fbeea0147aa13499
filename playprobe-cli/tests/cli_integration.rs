use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn playprobe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("playprobe").expect("Failed to find playprobe binary");
    cmd.env_remove("PLAYPROBE_MPV")
        .env_remove("PLAYPROBE_SETTLE_MS")
        .arg("--no-color");
    cmd
}

#[test]
fn test_help_lists_commands() {
    playprobe_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("scan"))
        .stdout(contains("probe"))
        .stdout(contains("bench"));
}

#[test]
fn test_scan_non_existent_root() {
    playprobe_cmd()
        .arg("scan")
        .arg("surely/this/does/not/exist")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not a directory"));
}

#[test]
fn test_scan_without_media_is_an_empty_report() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    fs::write(root.path().join("notes.txt"), "not media")?;

    // No file to probe, so the (missing) player is never launched.
    playprobe_cmd()
        .arg("scan")
        .arg(root.path())
        .arg("--mpv")
        .arg("/nonexistent/mpv")
        .assert()
        .success()
        .stdout(contains("SUMMARY"))
        .stdout(contains("Succeeded:"));
    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;

    playprobe_cmd()
        .arg("scan")
        .arg(root.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(contains("\"total\": 0"))
        .stdout(contains("\"interrupted\": false"));
    Ok(())
}

#[test]
fn test_probe_with_missing_player_exits_with_start_failure() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("clip.avi");
    fs::write(&file, "dummy content")?;

    playprobe_cmd()
        .arg("probe")
        .arg(&file)
        .arg("--mpv")
        .arg("/nonexistent/path/to/mpv")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Failed to start player"));
    Ok(())
}

#[test]
fn test_scan_with_missing_player_exits_with_start_failure() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    fs::write(root.path().join("clip.avi"), "dummy content")?;

    playprobe_cmd()
        .env("PLAYPROBE_MPV", "/nonexistent/path/to/mpv")
        .arg("scan")
        .arg(root.path())
        .assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn test_probe_non_existent_file() {
    playprobe_cmd()
        .arg("probe")
        .arg("surely/this/does/not/exist.avi")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("is not a file"));
}

#[test]
fn test_bench_attach_to_missing_socket() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("clip.mp4");
    fs::write(&file, "dummy content")?;

    playprobe_cmd()
        .arg("bench")
        .arg(&file)
        .arg("--attach")
        .arg(dir.path().join("no-such.sock"))
        .assert()
        .failure()
        .code(2)
        .stderr(contains("cannot connect to IPC socket"));
    Ok(())
}

#[test]
fn test_log_dir_receives_run_log() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let logs = tempdir()?;

    playprobe_cmd()
        .arg("scan")
        .arg(root.path())
        .arg("--log-dir")
        .arg(logs.path())
        .assert()
        .success();

    let log_files: Vec<_> = fs::read_dir(logs.path())?
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("playprobe_"))
        .collect();
    assert_eq!(log_files.len(), 1);
    let contents = fs::read_to_string(log_files[0].path())?;
    assert!(contents.contains("No media files found"));
    Ok(())
}

#[test]
fn test_invalid_arguments() {
    playprobe_cmd()
        .arg("bench")
        .arg("clip.mp4")
        .arg("--steps")
        .arg("not-a-number")
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_sigterm_during_bench_stops_cleanly() -> Result<(), Box<dyn Error>> {
    use serde_json::{Value, json};
    use std::io::{BufRead, BufReader, Write};
    use std::os::unix::net::UnixListener;
    use std::process::{Command as StdCommand, Stdio};
    use std::thread;
    use std::time::Duration;

    let dir = tempdir()?;
    let file = dir.path().join("clip.mp4");
    fs::write(&file, "dummy content")?;
    let socket = dir.path().join("player.sock");
    let listener = UnixListener::bind(&socket)?;

    // Answers every request after a short delay so the benchmark is still
    // stepping when the signal arrives.
    let server = thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else { return };
        let Ok(mut writer) = stream.try_clone() else { return };
        for line in BufReader::new(stream).lines() {
            let Ok(line) = line else { return };
            let Ok(request) = serde_json::from_str::<Value>(&line) else { continue };
            thread::sleep(Duration::from_millis(20));
            let reply = json!({"error": "success", "data": null, "request_id": request["request_id"]});
            if writeln!(writer, "{reply}").is_err() {
                return;
            }
        }
    });

    let child = StdCommand::new(assert_cmd::cargo::cargo_bin("playprobe"))
        .env_remove("PLAYPROBE_MPV")
        .env_remove("PLAYPROBE_SETTLE_MS")
        .args(["--no-color", "bench"])
        .arg(&file)
        .arg("--attach")
        .arg(&socket)
        .args(["--settle-ms", "0", "--steps", "100000"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    thread::sleep(Duration::from_millis(500));
    let killed = StdCommand::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()?;
    assert!(killed.success());

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Interrupted"));
    server.join().expect("server thread");
    Ok(())
}
