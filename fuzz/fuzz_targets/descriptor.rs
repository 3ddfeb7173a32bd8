#![no_main]

use libfuzzer_sys::fuzz_target;
use jniscope::descriptor::decode_member;

fuzz_target!(|data: &str| {
    let _ = decode_member(".ctor", data);
});
