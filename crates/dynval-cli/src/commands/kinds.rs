use dynval_core::ALL;

pub fn run() {
    print!("{}", render());
}

/// One line per kind in registry order: name, family, payload type.
pub(crate) fn render() -> String {
    let mut out = format!("Kinds ({}):\n", ALL.len());
    for &kind in ALL {
        out.push_str(&format!(
            "  {:<9} {:<14} {}\n",
            kind.name(),
            kind.family(),
            kind.rust_type()
        ));
    }
    out
}
