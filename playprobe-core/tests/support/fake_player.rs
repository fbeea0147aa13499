// playprobe-core/tests/support/fake_player.rs
//
// Stand-in player for the session lifecycle tests. Listens on the
// `--input-ipc-server` path and answers every request with success.
//
// Extra flags:
//   --ignore-quit          reply to `quit` but keep running
//   --quit-marker=PATH     append a line to PATH for every `quit` received

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::process;

use serde_json::{Value, json};

#[derive(Default)]
struct Behaviour {
    ignore_quit: bool,
    quit_marker: Option<PathBuf>,
}

fn main() {
    let mut socket = None;
    let mut behaviour = Behaviour::default();
    for arg in std::env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--input-ipc-server=") {
            socket = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--quit-marker=") {
            behaviour.quit_marker = Some(PathBuf::from(path));
        } else if arg == "--ignore-quit" {
            behaviour.ignore_quit = true;
        }
    }

    let Some(socket) = socket else {
        eprintln!("fake player: missing --input-ipc-server");
        process::exit(2);
    };
    let listener = match UnixListener::bind(&socket) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("fake player: cannot bind {}: {e}", socket.display());
            process::exit(2);
        }
    };

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => serve(stream, &behaviour),
            Err(_) => break,
        }
    }
}

fn serve(stream: UnixStream, behaviour: &Behaviour) {
    let Ok(mut writer) = stream.try_clone() else {
        return;
    };
    for line in BufReader::new(stream).lines() {
        let Ok(line) = line else { return };
        let Ok(request) = serde_json::from_str::<Value>(&line) else {
            continue;
        };
        let command = request["command"][0].as_str().unwrap_or_default();

        if command == "quit" {
            if let Some(marker) = &behaviour.quit_marker {
                record_quit(marker);
            }
            if !behaviour.ignore_quit {
                process::exit(0);
            }
        }

        let data = match (command, request["command"][1].as_str()) {
            ("get_property", Some("mpv-version")) => json!("fake-player 1.0"),
            _ => Value::Null,
        };
        let reply = json!({
            "error": "success",
            "data": data,
            "request_id": request["request_id"],
        });
        if writeln!(writer, "{reply}").is_err() {
            return;
        }
    }
}

fn record_quit(marker: &Path) {
    let opened = OpenOptions::new().create(true).append(true).open(marker);
    if let Ok(mut file) = opened {
        let _ = writeln!(file, "quit");
    }
}
