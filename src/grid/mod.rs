//! The two board tables: placed guesses and scored feedback.

pub mod feedback;
pub mod guess;

pub use feedback::{Feedback, FeedbackGrid, FeedbackPeg};
pub use guess::GuessGrid;
