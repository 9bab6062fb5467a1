//! MealSetu main entrypoint.

use mealsetu::run;
use mealsetu::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
