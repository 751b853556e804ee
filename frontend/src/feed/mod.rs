//! Roster feed thread.
//!
//! Owns the (simulated) room and produces everything the UI consumes from
//! the outside world: roster snapshots and video frames. Runs on its own
//! thread and talks to the UI only through the [`FeedCommand`] and
//! [`FeedEvent`] channels.

mod pattern;
mod room;

use crate::config::AppConfig;
use crate::events::{FeedCommand, FeedEvent};
use logging::Logger;
use rand::Rng;
use room::SimulatedRoom;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(66);

/// Chance per frame that someone joins or leaves (about every eight seconds).
const CHURN_PROBABILITY: f64 = 1.0 / 120.0;

/// Main loop of the feed thread. Returns on `Shutdown` or when the UI side
/// of either channel is gone.
pub fn run_feed_thread(
    cmd_rx: Receiver<FeedCommand>,
    evt_tx: Sender<FeedEvent>,
    config: AppConfig,
    logger: Logger,
) {
    let mut rng = rand::thread_rng();
    let mut room = SimulatedRoom::new(
        config.display_name.clone(),
        config.simulated_participants,
        &mut rng,
    );
    logger.info(&format!(
        "[ROSTER] Room '{}' opened with {} participant(s)",
        config.room_id, config.simulated_participants
    ));

    if !publish(&room, &evt_tx) {
        return;
    }

    let mut frame: u64 = 0;
    loop {
        let deadline = Instant::now() + FRAME_INTERVAL;
        while let Some(wait) = deadline.checked_duration_since(Instant::now()) {
            match cmd_rx.recv_timeout(wait) {
                Ok(FeedCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                    logger.info("[ROSTER] Feed thread stopping");
                    return;
                }
                Ok(command) => {
                    if !handle_command(&mut room, command, &evt_tx, &logger) {
                        return;
                    }
                }
                Err(RecvTimeoutError::Timeout) => break,
            }
        }

        if config.roster_churn && rng.gen_bool(CHURN_PROBABILITY) && room.churn(&mut rng) {
            logger.debug("[ROSTER] Participant joined or left");
            if !publish(&room, &evt_tx) {
                return;
            }
        }

        for (handle, color, phase, speaking) in room.streams() {
            let level = pattern::audio_level(frame, phase, speaking);
            let image = pattern::render(color, frame, level);
            if evt_tx.send(FeedEvent::Frame { handle, image, level }).is_err() {
                return;
            }
        }
        frame = frame.wrapping_add(1);
    }
}

/// Applies one command. Returns false once the UI has gone away.
fn handle_command(
    room: &mut SimulatedRoom,
    command: FeedCommand,
    evt_tx: &Sender<FeedEvent>,
    logger: &Logger,
) -> bool {
    logger.debug(&format!("[ROSTER] Handling command: {:?}", command));
    match command {
        FeedCommand::StartPresenting => {
            if room.start_presenting() {
                logger.info("[ROSTER] Presenting started");
                return publish(room, evt_tx);
            }
            true
        }
        FeedCommand::StopPresenting => {
            if room.stop_presenting() {
                logger.info("[ROSTER] Presenting stopped");
                return publish(room, evt_tx);
            }
            true
        }
        FeedCommand::ToggleMicrophone => {
            let on = room.toggle_microphone();
            evt_tx.send(FeedEvent::MicrophoneChanged(on)).is_ok()
        }
        FeedCommand::UpdateDisplayName(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return evt_tx
                    .send(FeedEvent::Error("Display name cannot be empty".to_string()))
                    .is_ok();
            }
            logger.info(&format!("[ROSTER] Display name changed to '{}'", name));
            room.rename(name);
            publish(room, evt_tx)
        }
        FeedCommand::SaveDisplaySettings(settings) => {
            room.save_settings(settings);
            logger.debug(&format!(
                "[ROSTER] Display settings saved: {:?}",
                room.settings()
            ));
            true
        }
        // Handled by the caller
        FeedCommand::Shutdown => false,
    }
}

fn publish(room: &SimulatedRoom, evt_tx: &Sender<FeedEvent>) -> bool {
    evt_tx.send(FeedEvent::RosterChanged(room.roster())).is_ok()
}
