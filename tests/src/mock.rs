//! Scripted stand-in for the system command runner.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use netswitch_core::executor::{CommandName, CommandOutcome, CommandRunner};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub command: CommandName,
    pub args: Vec<String>,
    pub timeout: Duration,
}

type Handler = Box<dyn Fn(CommandName, &[String]) -> CommandOutcome + Send + Sync>;

/// Answers every invocation through a caller-supplied handler and records
/// the full call sequence for assertions.
pub struct MockRunner {
    handler: Handler,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRunner {
    pub fn new(
        handler: impl Fn(CommandName, &[String]) -> CommandOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every invocation yields a clone of `outcome`.
    pub fn always(outcome: CommandOutcome) -> Self {
        Self::new(move |_, _| outcome.clone())
    }

    /// Pops scripted outcomes in order; a drained script keeps succeeding.
    pub fn sequence(script: Vec<CommandOutcome>) -> Self {
        let script = Mutex::new(script);
        Self::new(move |_, _| {
            let mut script = script.lock().unwrap();
            if script.is_empty() {
                CommandOutcome::success(String::new(), String::new())
            } else {
                script.remove(0)
            }
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(
        &self,
        command: CommandName,
        args: &[String],
        timeout: Duration,
    ) -> CommandOutcome {
        self.calls.lock().unwrap().push(RecordedCall {
            command,
            args: args.to_vec(),
            timeout,
        });
        (self.handler)(command, args)
    }
}
