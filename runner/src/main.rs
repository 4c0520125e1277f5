use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use reedline::{DefaultPrompt, Reedline, Signal};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use veridic_evaluation::{evaluate, evaluate_annotated, parse};
use veridic_semantics::{DomainOfDiscourse, Interpretation, Model, Predicate};
use veridic_syntax::normalize;

/// Evaluate first-order formulas against a finite, explicitly given model.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Model definition file (JSON). Without it, a small built-in demo
    /// model is used.
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Evaluate a single formula and exit (exit code 1 when false).
    #[arg(short, long)]
    formula: Option<String>,

    /// Print the truth value of every subformula, not just the root.
    #[arg(short, long)]
    trace: bool,
}

// ── Model definition file ──

#[derive(Deserialize)]
struct ModelFile {
    #[serde(default = "default_model_name")]
    name: String,
    #[serde(default)]
    domain: Vec<String>,
    #[serde(default)]
    constants: BTreeMap<String, String>,
    #[serde(default)]
    predicates: Vec<PredicateDef>,
    #[serde(default)]
    sentence_letters: BTreeMap<String, bool>,
}

#[derive(Deserialize)]
struct PredicateDef {
    name: String,
    arity: usize,
    #[serde(default)]
    extension: Vec<Vec<String>>,
}

fn default_model_name() -> String {
    "M".to_string()
}

fn load_model(path: &PathBuf) -> Result<Model> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading model file {}", path.display()))?;
    let file: ModelFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing model file {}", path.display()))?;

    let mut interpretation = Interpretation::new();
    for def in file.predicates {
        let mut predicate = Predicate::new(&def.name, def.arity);
        for tuple in def.extension {
            predicate = predicate
                .extend(tuple)
                .with_context(|| format!("extension of predicate '{}'", def.name))?;
        }
        interpretation = interpretation.add_predicate(predicate);
    }
    for (constant, object) in file.constants {
        interpretation = interpretation.bind(constant, object);
    }
    for (letter, value) in file.sentence_letters {
        interpretation = interpretation.add_sentence_letter(letter, value);
    }

    Ok(Model::new(file.name)
        .with_domain(DomainOfDiscourse::new().expand(file.domain))
        .with_interpretation(interpretation))
}

/// Two princes of Amber and three predicates over them.
fn demo_model() -> Model {
    Model::new("M")
        .with_domain(DomainOfDiscourse::new().expand(["Corwin", "Benedict"]))
        .with_interpretation(
            Interpretation::new()
                .add_predicate(
                    Predicate::new("A", 1)
                        .extend("Corwin")
                        .expect("unary tuple")
                        .extend("Benedict")
                        .expect("unary tuple"),
                )
                .add_predicate(Predicate::new("B", 1).extend("Benedict").expect("unary tuple"))
                .add_predicate(Predicate::new("N", 1))
                .bind("c", "Corwin"),
        )
}

// ── Formula pipeline ──

fn run_formula(model: &Model, formula: &str, trace: bool) -> Result<bool, String> {
    let normalized = normalize(formula);
    if normalized != formula {
        println!("[1] Normalized: {}", normalized);
    }

    let ast = parse(&normalized, model).map_err(|e| format!("Syntax: {}", e))?;
    println!("[2] AST: {}", ast);

    if trace {
        let result = evaluate_annotated(&ast, model).map_err(|e| format!("Evaluation: {}", e))?;
        println!("[3] Subformula truth values:");
        let mut entries: Vec<_> = result.values.iter().collect();
        entries.sort_by_key(|(id, _)| **id);
        let nodes = ast.preorder();
        for (id, value) in entries {
            println!("      [{}] {} = {}", id.0, nodes[id.0], value);
        }
        Ok(result.value)
    } else {
        evaluate(&ast, model).map_err(|e| format!("Evaluation: {}", e))
    }
}

fn repl(model: &Model, trace: bool) -> Result<()> {
    println!("==================================================");
    println!(" veridic — formulas against a finite model");
    println!("==================================================");
    println!("Type a formula, ':model' to show the model, ':quit' to exit.");

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                match input {
                    ":quit" | ":q" => break,
                    ":model" => {
                        println!("{}", model);
                        continue;
                    }
                    _ => {}
                }

                match run_formula(model, input, trace) {
                    Ok(value) => println!("[✓] {} is {}", input, value),
                    Err(e) => eprintln!("[✗] {}", e),
                }
            }
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => break,
            Err(e) => return Err(e).context("reading input"),
        }
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let model = match &args.model {
        Some(path) => load_model(path)?,
        None => demo_model(),
    };

    if let Some(formula) = &args.formula {
        return match run_formula(&model, formula, args.trace) {
            Ok(true) => {
                println!("[✓] true");
                Ok(ExitCode::SUCCESS)
            }
            Ok(false) => {
                println!("[✗] false");
                Ok(ExitCode::FAILURE)
            }
            Err(e) => {
                eprintln!("[✗] {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    println!("{}", model);
    repl(&model, args.trace)?;
    Ok(ExitCode::SUCCESS)
}
