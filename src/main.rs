//! frontdesk main entrypoint.

use frontdesk::run;
use frontdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
