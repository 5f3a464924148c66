#![no_main]

use libfuzzer_sys::fuzz_target;
use sectoolbox::category::{forms, Category};
use sectoolbox::engine::ExecutionInput;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary labels must never panic the registry key path.
    let _ = Category::parse(text);

    // Arbitrary JSON maps must validate without panicking for every contract.
    if let Ok(input) = serde_json::from_str::<ExecutionInput>(text) {
        for category in Category::all() {
            let contract = forms::form_contract(category);
            let mut filled = input.clone();
            forms::apply_defaults(contract, &mut filled);
            let _ = forms::validate(contract, &filled);
        }
    }
});
