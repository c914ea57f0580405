use running_calculator::calc;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Raw text of the time field (minutes).
    pub time_input: String,

    /// Raw text of the pace field (`M:SS`).
    pub pace_input: String,

    /// Text shown in the result region; `None` until the first calculation.
    pub result_text: Option<String>,

    /// Whether the About window is open.
    pub show_about: bool,
}

impl AppState {
    /// Read the form fields, run the calculator and store the display text.
    pub fn calculate(&mut self) {
        let outcome = calc::compute(&self.time_input, &self.pace_input);
        let text = match outcome {
            Ok(distance) => {
                log::debug!(
                    "{} min at {} min/km -> {} km",
                    distance.time.minutes(),
                    distance.pace.minutes(),
                    distance.km()
                );
                distance.to_string()
            }
            Err(e) => {
                log::info!(
                    "Rejected input time={:?} pace={:?}",
                    self.time_input,
                    self.pace_input
                );
                e.to_string()
            }
        };
        self.result_text = Some(text);
    }

    pub fn open_about(&mut self) {
        log::debug!("Opening About window");
        self.show_about = true;
    }
}
