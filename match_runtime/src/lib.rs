//! Match runtime for the hand-tracked Pong core.
//!
//! Wraps the `game_core` simulation with the pieces a host needs to run
//! a match: the Idle/Running lifecycle, the input-source seam for the
//! camera + hand detector, per-tick snapshots for the presentation
//! layer, and a fixed-cadence tick loop.

pub mod fsm;
pub mod input;
pub mod runner;
pub mod session;
pub mod snapshot;

pub use fsm::{MatchAction, MatchFsm, MatchPhase};
pub use input::{frame_from_detections, HandDetection, HandLabel, InputSource, SourceError};
pub use runner::{SnapshotSink, TickLoop, TICK_PERIOD};
pub use session::MatchSession;
pub use snapshot::{BallView, MatchSnapshot, PaddleView};
