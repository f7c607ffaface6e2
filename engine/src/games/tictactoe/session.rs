use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

use crate::log;
use super::game_state::{ComputerMove, GameSession};

pub type SharedSession = Arc<Mutex<GameSession>>;

pub struct ComputerTurnScheduler {
    session: SharedSession,
    think_delay: Duration,
    notifications: mpsc::UnboundedSender<ComputerMove>,
    pending: Option<JoinHandle<()>>,
}

impl ComputerTurnScheduler {
    pub fn new(
        session: SharedSession,
        think_delay: Duration,
        notifications: mpsc::UnboundedSender<ComputerMove>,
    ) -> Self {
        Self {
            session,
            think_delay,
            notifications,
            pending: None,
        }
    }

    pub fn schedule(&mut self, epoch: u64) {
        self.cancel();

        let session = self.session.clone();
        let think_delay = self.think_delay;
        let notifications = self.notifications.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(think_delay).await;

            let result = session.lock().await.play_computer_turn(epoch);
            match result {
                Ok(Some(computer_move)) => {
                    if notifications.send(computer_move).is_err() {
                        log!("Computer move for epoch {} had no listener", epoch);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log!("Computer failed to move in epoch {}: {}", epoch, e);
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ComputerTurnScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
