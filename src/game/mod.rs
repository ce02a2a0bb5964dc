pub mod board;
pub mod path_generator;
pub mod riddle_generator;
mod solver;

pub use board::ConstraintBoard;
pub use path_generator::calc_final_layout;
pub use riddle_generator::{calc_riddle, riddle_for_layout};

#[cfg(test)]
pub mod tests {
    use std::sync::Once;
    use test_context::TestContext;

    static INIT_LOGGER: Once = Once::new();

    pub struct UsingLogger {
        _value: String,
    }

    impl TestContext for UsingLogger {
        fn setup() -> UsingLogger {
            INIT_LOGGER.call_once(|| {
                env_logger::init();
            });

            UsingLogger {
                _value: "Hello, World!".to_string(),
            }
        }

        fn teardown(self) {
            // Perform any teardown you wish.
        }
    }
}
