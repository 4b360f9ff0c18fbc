use std::{
    io,
    ops::ControlFlow,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{Receiver, Sender};

use crate::{
    color::SupportsColor,
    reporter::{Aborted, Reporter},
    result::TestResult,
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// Fail-fast stopped the run before all results were recorded.
    Aborted,
}

/// Owns a [`Reporter`] on a dedicated thread and feeds it results from a
/// channel.
///
/// Producers (the test engine's workers) send [`TestResult`]s through the
/// sender; the session thread records them strictly in arrival order, so the
/// reporter never sees concurrent `record` calls. When fail-fast aborts the
/// run the session stops receiving and drops its end of the channel, which
/// producers observe as a failed `send`.
pub struct ReportSession<W: io::Write> {
    sender: Sender<TestResult>,
    thread: JoinHandle<(Reporter<W>, io::Result<RunStatus>)>,
}

impl<W> ReportSession<W>
where
    W: io::Write + SupportsColor + Send + 'static,
{
    pub fn spawn(reporter: Reporter<W>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let thread = thread::spawn(move || pump(reporter, receiver));
        Self { sender, thread }
    }

    pub fn sender(&self) -> &Sender<TestResult> {
        &self.sender
    }

    /// Close the channel, wait for the remaining results to be recorded and
    /// collect the reporter back.
    ///
    /// The end-of-run summary is printed only for runs that completed; an
    /// aborted run already stopped at the failing test.
    pub fn finish(self) -> (Reporter<W>, io::Result<RunStatus>) {
        drop(self.sender);
        self.thread
            .join()
            .expect("reporter thread should join without issues")
    }
}

fn pump<W: io::Write + SupportsColor>(
    mut reporter: Reporter<W>,
    receiver: Receiver<TestResult>,
) -> (Reporter<W>, io::Result<RunStatus>) {
    while let Ok(result) = receiver.recv() {
        match reporter.record(result) {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(Aborted)) => return (reporter, Ok(RunStatus::Aborted)),
            Err(err) => return (reporter, Err(err)),
        }
    }

    let report = reporter.report();
    (reporter, report.map(|()| RunStatus::Completed))
}
