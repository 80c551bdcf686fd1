pub mod firebase;

pub use firebase::FirebaseGoalSource;
