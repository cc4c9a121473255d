use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;

use super::thread::spawn_player_thread;
use super::types::{NowPlayingHandle, NowPlayingInfo, PlayerCmd};

pub struct Player {
    tx: Sender<PlayerCmd>,
    now_playing: NowPlayingHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        let now_playing: NowPlayingHandle = Arc::new(Mutex::new(NowPlayingInfo::default()));

        let handle = spawn_player_thread(rx, now_playing.clone(), audio_settings);

        Self {
            tx,
            now_playing,
            join: Mutex::new(Some(handle)),
        }
    }

    pub fn now_playing_handle(&self) -> NowPlayingHandle {
        self.now_playing.clone()
    }

    pub fn send(&self, cmd: PlayerCmd) -> Result<(), mpsc::SendError<PlayerCmd>> {
        self.tx.send(cmd)
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(PlayerCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
