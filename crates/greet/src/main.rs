//! Greet capability - replies with a greeting for the given name.

fn main() {
    capability_common::run(greet::handle);
}
