//! Surface Events
//!
//! Events sent from UI surfaces to the deck. Surfaces are "dumb"
//! renderers: they report what the user did (or that a second of host
//! time elapsed) and the deck decides how to respond.

use serde::{Deserialize, Serialize};

use crate::tasks::TaskId;
use crate::timer::TimerMode;

/// Events from a UI surface to the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// User activated one of the three mode-select controls.
    ModeSelected {
        /// The selected countdown mode.
        mode: TimerMode,
    },

    /// User activated the start/pause toggle control.
    StartPauseToggled,

    /// User activated the reset control.
    ResetPressed,

    /// One second elapsed on the host's recurring schedule.
    ///
    /// The host fires this unconditionally; the deck ignores it while the
    /// timer is paused. Exactly one recurring schedule may exist per
    /// surface - a second one would double-decrement the countdown.
    Tick,

    /// User submitted the task entry field (add control or Enter key).
    TaskSubmitted {
        /// Raw field content, not yet trimmed.
        text: String,
    },

    /// User activated the delete control of a task row.
    TaskDeleted {
        /// Id of the task whose row was activated.
        id: TaskId,
    },

    /// Task entry field content changed (drives the character counter).
    InputChanged {
        /// Current field content.
        text: String,
    },

    /// User asked to quit the session.
    QuitRequested,
}
