// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider and store operations into the explicit save
// pipeline (validate -> prepare -> persist) and the sign-in checks. They hold
// no rules of their own.

pub mod user_coordinator;

pub use user_coordinator::UserCoordinator;
