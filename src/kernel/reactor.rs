use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::event::{Event, PredictionOutcome, SubmissionId};
use super::state::{ShellState, StateDelta};
use crate::claim::ClaimInput;
use crate::config::Config;
use crate::console;
use crate::outputs::realizer;
use crate::services::predict::PredictionService;

pub const BUSY_NOTICE: &str = "A prediction is already in progress.";

#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Print a full view
    Render(String),
    /// Start the network call for this submission
    Predict { submission: SubmissionId, claim: ClaimInput },
    /// Short user-facing line
    Notice(String),
    Exit,
}

pub struct Reactor {
    pub receiver: mpsc::Receiver<Event>,
    // Handed to background requests so they can report back
    tx_clone: mpsc::Sender<Event>,
    pub state: ShellState,
    service: PredictionService,
    // Quit seen; exit once nothing is pending
    quitting: bool,
}

impl Reactor {
    pub fn new(receiver: mpsc::Receiver<Event>, tx: mpsc::Sender<Event>, config: &Config) -> Self {
        Self {
            receiver,
            tx_clone: tx,
            state: ShellState::new(),
            service: PredictionService::new(config),
            quitting: false,
        }
    }

    /// Applies a batch of events and returns the side effects for the driver.
    /// MUST NOT await I/O.
    pub fn tick_step(&mut self, events: Vec<Event>) -> Vec<SideEffect> {
        let mut effects = Vec::new();
        let mut dirty = false;

        for event in events {
            // After quit only the outstanding completion matters
            if self.quitting && !matches!(event, Event::PredictionCompleted { .. }) {
                continue;
            }

            match event {
                Event::FieldEdited { field, value } => {
                    debug!("Field {} set to '{}'", field, value);
                    self.state.reduce(StateDelta::FieldEdited { field, value });
                    dirty = true;
                }
                Event::Submit => {
                    // One request at a time
                    if let Some(in_flight) = self.state.pending() {
                        info!("Submit ignored: prediction {} still in flight", in_flight);
                        effects.push(SideEffect::Notice(BUSY_NOTICE.to_string()));
                        continue;
                    }

                    let submission = SubmissionId::new();
                    let claim = self.state.form().clone();
                    self.state.reduce(StateDelta::SubmissionStarted(submission));
                    info!("Submitting prediction {}: {:?}", submission, claim);

                    effects.push(SideEffect::Predict { submission, claim });
                    dirty = true;
                }
                Event::PredictionCompleted { submission, outcome } => {
                    if self.state.pending() != Some(submission) {
                        warn!("Discarded stale prediction {} (pending {:?})", submission, self.state.pending());
                        continue;
                    }

                    match outcome {
                        PredictionOutcome::Succeeded(result) => {
                            self.state.reduce(StateDelta::PredictionSucceeded(result));
                        }
                        PredictionOutcome::Failed(detail) => {
                            debug!("Prediction {} failure detail: {}", submission, detail);
                            self.state.reduce(StateDelta::PredictionFailed);
                        }
                    }
                    dirty = true;
                }
                Event::Show => dirty = true,
                Event::Options => effects.push(SideEffect::Render(realizer::render_options())),
                Event::Help => effects.push(SideEffect::Render(console::HELP.to_string())),
                Event::Quit => {
                    self.quitting = true;
                    if let Some(in_flight) = self.state.pending() {
                        info!("Quit deferred until prediction {} completes", in_flight);
                    }
                    break;
                }
            }
        }

        if dirty {
            effects.push(SideEffect::Render(realizer::render(&self.state)));
        }

        if self.quitting && !self.state.is_loading() {
            effects.push(SideEffect::Exit);
        }

        effects
    }

    /// Async driver loop. Returns on `Quit` (once no prediction is pending)
    /// or when every sender is gone.
    pub async fn run(&mut self) {
        info!("Shell started. Endpoint: {}", self.service.endpoint());
        println!("{}", realizer::render(&self.state));

        while let Some(first) = self.receiver.recv().await {
            let mut events = vec![first];
            while let Ok(event) = self.receiver.try_recv() {
                events.push(event);
            }

            for effect in self.tick_step(events) {
                match effect {
                    SideEffect::Render(text) => println!("{}", text),
                    SideEffect::Notice(text) => println!("{}", text),
                    SideEffect::Predict { submission, claim } => {
                        // No cancellation: the task runs until it answers or fails.
                        self.service.dispatch(submission, claim, self.tx_clone.clone());
                    }
                    SideEffect::Exit => {
                        info!("Shell stopping");
                        return;
                    }
                }
            }
        }
    }
}
