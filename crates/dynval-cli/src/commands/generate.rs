use std::fs;
use std::path::PathBuf;

use dynval_core::Op;
use dynval_synth::{Config, SynthError, cases, render_module};

pub struct GenerateArgs {
    pub ops: Vec<Op>,
    pub output: Option<PathBuf>,
    pub bare: bool,
    pub header: bool,
}

pub fn run(args: GenerateArgs) {
    let output = match render(&args) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("error: failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

/// Full module, or with `bare` each case table under a `// <op>` line.
pub(crate) fn render(args: &GenerateArgs) -> Result<String, SynthError> {
    if !args.bare {
        let config = Config::new()
            .header(args.header)
            .ops(args.ops.iter().copied());
        return render_module(&config);
    }

    let mut output = String::new();
    for (i, &op) in args.ops.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("// {}\n", op.name()));
        output.push_str(&cases(op)?);
    }
    Ok(output)
}
