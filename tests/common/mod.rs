mod test_app;

// Re-export
pub use assertions::{
    assert_attitude_eq, assert_grounded_invariants, assert_position_eq, assert_state_valid,
};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
