//! Routes served by the `helm` binary.
//!
//! `hello` echoes its own flags and arguments and carries a two-level
//! sub-route tree. `json` pretty-prints a fixed document. `greet` requires a
//! `names` argument.

use helm_syntax::ParsedCommand;

use crate::dispatch::{CommandContext, HandlerError, RegistrationError, Route, RouteTable};
use crate::output::JsonFormatter;

const SAMPLE_DOCUMENT: &[u8] =
    br#"{"name":"helm","routes":["hello","json","greet"],"nested":{"hello":["one","two","three"],"one":["uno"]}}"#;

/// Builds the route table served by the binary.
///
/// # Errors
///
/// Returns [`RegistrationError`] if two routes share a name.
pub fn routes() -> Result<RouteTable, RegistrationError> {
    let one = Route::new(|context| context.write_line("running sub-command: one"))
        .with_sub_route(
            "uno",
            Route::new(|context| context.write_line("running sub-sub-command: uno")),
        )?;
    let hello = Route::new(hello)
        .with_sub_route("one", one)?
        .with_sub_route(
            "two",
            Route::new(|context| context.write_line("running sub-command: two")),
        )?
        .with_sub_route(
            "three",
            Route::new(|context| context.write_line("running sub-command: three")),
        )?;

    let mut table = RouteTable::new();
    table.register("hello", hello)?;
    table.register(
        "json",
        Route::new(|context| context.write_formatted(SAMPLE_DOCUMENT, &JsonFormatter)),
    )?;
    table.register("greet", Route::new(greet))?;
    Ok(table)
}

fn hello(context: &mut CommandContext<'_>) -> Result<(), HandlerError> {
    let message = format!("Hi there!{}", describe(context.node()));
    context.write_line(&message)
}

fn greet(context: &mut CommandContext<'_>) -> Result<(), HandlerError> {
    let names = context.require_arg("names")?;
    let salutation = if context.flag(b's') { "Hi" } else { "Hello" };
    let message = format!("{salutation}, {}", names.join(", "));
    context.write_line(&message)
}

/// Summarises a node's flags and arguments, sorted.
fn describe(node: &ParsedCommand) -> String {
    let mut summary = String::new();
    if !node.flags().is_empty() {
        let flags: Vec<String> = node
            .flags()
            .iter()
            .map(|flag| char::from(*flag).to_string())
            .collect();
        summary.push_str(" flag: ");
        summary.push_str(&flags.join(","));
    }
    if !node.args().is_empty() {
        let args: Vec<String> = node
            .args()
            .iter()
            .map(|(key, values)| format!("{key}={}", values.join(",")))
            .collect();
        summary.push_str(" args: ");
        summary.push_str(&args.join(", "));
    }
    summary
}
