//! Post-generation hook: summarizes the generated project.

use baker_hooks::hooks::{self, Hook};

fn main() {
    hooks::main(Hook::PostGenProject);
}
