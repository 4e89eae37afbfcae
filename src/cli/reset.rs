//! `waymark reset` command implementation.

use crate::error::Result;

/// Run the reset command.
///
/// Clears the persisted workout collection. The next session starts
/// empty.
///
/// # Errors
///
/// Returns an error if configuration or storage fails.
pub fn run() -> Result<()> {
    let mut controller = super::build_controller()?;
    controller.reset_all()?;

    println!("Workout log cleared.");

    Ok(())
}
