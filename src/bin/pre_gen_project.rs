//! Pre-generation hook: rejects invalid template variables before baker
//! generates any file.

use baker_hooks::hooks::{self, Hook};

fn main() {
    hooks::main(Hook::PreGenProject);
}
