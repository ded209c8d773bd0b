//! Completion cue played after a correct answer.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use tracing::debug;

const DEFAULT_PLAYER: &str = "paplay";
const DEFAULT_SOUND: &str = "/usr/share/sounds/freedesktop/stereo/complete.oga";

/// An audio player command and the file it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chime {
    pub player: String,
    pub sound: PathBuf,
}

impl Default for Chime {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER.to_string(),
            sound: PathBuf::from(DEFAULT_SOUND),
        }
    }
}

impl Chime {
    /// Starts playback on a detached thread and returns immediately.
    ///
    /// Any failure, including a missing player, is logged at debug level and
    /// otherwise ignored. The handle is only useful to tests.
    pub fn play(&self) -> Option<JoinHandle<()>> {
        let player = self.player.clone();
        let sound = self.sound.clone();
        let spawned = thread::Builder::new()
            .name("chime".to_string())
            .spawn(move || {
                let status = Command::new(&player)
                    .arg(&sound)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status();
                match status {
                    Ok(status) if !status.success() => {
                        debug!(player = %player, %status, "chime player exited unsuccessfully");
                    }
                    Ok(_) => {}
                    Err(err) => debug!(player = %player, error = %err, "chime player unavailable"),
                }
            });
        match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                debug!(error = %err, "could not start chime thread");
                None
            }
        }
    }
}
