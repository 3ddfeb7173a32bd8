use anyhow::Context;
use jniscope::descriptor::{decode_member, normalize_member_name};
use serde::Serialize;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
struct DecodeOutput {
    name: String,
    signature: String,
    declaration: String,
}

pub fn run(name: &str, signature: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let declaration = decode_member(name, signature)
        .with_context(|| format!("cannot decode signature of {name}"))?;

    let data = DecodeOutput {
        name: normalize_member_name(name).to_string(),
        signature: signature.to_string(),
        declaration,
    };

    print_output(&data, opts, |data| println!("{}", data.declaration))
}
