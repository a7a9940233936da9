#![no_main]

use libfuzzer_sys::fuzz_target;
use launcher_core::extract;

fuzz_target!(|data: &[u8]| {
    // Tool output is read lossily, so fuzz the same way
    let text = String::from_utf8_lossy(data);
    if let Some(triple) = extract::host_triple(&text) {
        assert!(!triple.chars().any(char::is_whitespace));
    }
    if let Some(version) = extract::llvm_version(&text) {
        assert!(!version.contains('\n'));
    }
});
