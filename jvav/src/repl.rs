use crate::config::ReplConfig;
use anyhow::{Context, Result};
use jvav::text::SourceText;
use jvav::{Compilation, Diagnostic, SyntaxTree, Value, Variables};
use jvav_ast::SyntaxNode;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::sync::Arc;

/// What became of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Evaluated(Option<Value>),
    Rejected(usize),
    Failed,
}

/// Session state shared by every submission: the last clean compilation and
/// the variable store.
#[derive(Default)]
pub struct Session {
    previous: Option<Arc<Compilation>>,
    variables: Variables,
    pub show_tree: bool,
    pub show_program: bool,
}

impl Session {
    pub fn new(config: &ReplConfig) -> Self {
        Self {
            show_tree: config.show_tree,
            show_program: config.show_program,
            ..Self::default()
        }
    }

    /// Compiles `tree` on top of the previous fragment and runs it. Only a
    /// fragment that runs to completion becomes the new previous one.
    pub fn submit(&mut self, tree: SyntaxTree, out: &mut impl Write) -> Result<Outcome> {
        if self.show_tree {
            let mut dump = String::new();
            jvav_ast::print::write_tree(&mut dump, SyntaxNode::Unit(tree.root()))?;
            write!(out, "{dump}")?;
        }

        let compilation = match &self.previous {
            Some(previous) => previous.continue_with(tree),
            None => Compilation::new(tree),
        };

        if self.show_program {
            let mut dump = String::new();
            compilation.emit_tree(&mut dump)?;
            write!(out, "{dump}")?;
        }

        let result = match compilation.evaluate(&mut self.variables) {
            Ok(result) => result,
            Err(err) => {
                writeln!(out, "runtime error: {err}")?;
                return Ok(Outcome::Failed);
            }
        };

        if !result.diagnostics.is_empty() {
            let text = compilation.syntax_tree().text();
            write_diagnostics(out, text, &result.diagnostics)?;
            return Ok(Outcome::Rejected(result.diagnostics.len()));
        }

        if let Some(value) = result.value {
            writeln!(out, "{value}")?;
        }

        self.previous = Some(Arc::new(compilation));

        Ok(Outcome::Evaluated(result.value))
    }

    /// Forgets every earlier fragment and every variable.
    pub fn reset(&mut self) {
        self.previous = None;
        self.variables.clear();
    }
}

/// Prints each diagnostic with its line and column, the offending line and
/// a marker under the reported span.
pub fn write_diagnostics(
    out: &mut impl Write,
    text: &str,
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    let source = SourceText::new(text);

    for diagnostic in diagnostics {
        let (line, col) = source.line_col(diagnostic.span().pos());
        let (prefix, error, suffix) = source.split_line(diagnostic.span());
        let marker = "^".repeat(error.chars().count().max(1));

        writeln!(out, "({line}, {col}): {}", diagnostic.message())?;
        writeln!(out, "    {prefix}{error}{suffix}")?;
        writeln!(out, "    {:width$}{marker}", "", width = prefix.chars().count())?;
    }

    Ok(())
}

/// Records `entry` in the line history. A failure only costs the entry.
fn remember(history: &mut impl History, entry: &str) {
    if let Err(err) = history.add(entry) {
        tracing::warn!(%err, "history entry dropped");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Repl {
    editor: DefaultEditor,
    config: ReplConfig,
    session: Session,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Result<Self> {
        let editor = DefaultEditor::new().context("initialising line editor")?;
        let session = Session::new(&config);

        Ok(Self {
            editor,
            config,
            session,
        })
    }

    /// Reads submissions until `#exit` or end of input. A submission keeps
    /// collecting lines while it does not parse, and is forced through by a
    /// blank line.
    pub fn run(&mut self) -> Result<()> {
        let mut text = String::new();
        let mut stdout = io::stdout();

        loop {
            let prompt = if text.is_empty() {
                &self.config.prompt
            } else {
                &self.config.continuation_prompt
            };

            let line = match self.editor.readline(prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    text.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err).context("reading input"),
            };

            let blank = line.trim().is_empty();

            if text.is_empty() {
                if blank {
                    continue;
                }

                if line.starts_with('#') {
                    remember(self.editor.history_mut(), &line);
                    if self.meta_command(line.trim(), &mut stdout)? == Flow::Exit {
                        break;
                    }
                    continue;
                }
            } else {
                text.push('\n');
            }

            text.push_str(&line);

            let tree = SyntaxTree::parse(&text);
            if !blank && !tree.diagnostics().is_empty() {
                continue;
            }

            remember(self.editor.history_mut(), &text);
            let outcome = self.session.submit(tree, &mut stdout)?;
            tracing::debug!(?outcome, "submission done");
            text.clear();
        }

        Ok(())
    }

    fn meta_command(&mut self, command: &str, out: &mut impl Write) -> Result<Flow> {
        match command {
            "#showTree" => {
                self.session.show_tree = !self.session.show_tree;
                let state = if self.session.show_tree { "Showing" } else { "Not showing" };
                writeln!(out, "{state} parse trees.")?;
            }
            "#showProgram" => {
                self.session.show_program = !self.session.show_program;
                let state = if self.session.show_program { "Showing" } else { "Not showing" };
                writeln!(out, "{state} bound trees.")?;
            }
            "#cls" => {
                write!(out, "\x1b[2J\x1b[1;1H")?;
                out.flush()?;
            }
            "#reset" => self.session.reset(),
            "#exit" => return Ok(Flow::Exit),
            other => writeln!(out, "unknown command '{other}'")?,
        }

        Ok(Flow::Continue)
    }
}
