//! The solver thread and its job queue.

use std::{
    fmt,
    sync::{OnceLock, mpsc},
    thread,
};

use super::{WorkError, WorkRequest, WorkResponse};

const THREAD_NAME: &str = "trailgrid-solver";

/// A queued request and the channel its answer goes back on.
type Job = (WorkRequest, mpsc::SyncSender<WorkResponse>);

/// `None` once spawning the solver thread has failed.
static JOBS: OnceLock<Option<mpsc::Sender<Job>>> = OnceLock::new();

/// The receiving end of one job's answer.
pub(super) struct WorkHandle {
    answer: mpsc::Receiver<WorkResponse>,
}

impl fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkHandle").finish_non_exhaustive()
    }
}

impl WorkHandle {
    pub(super) fn poll(&mut self) -> Result<Option<WorkResponse>, WorkError> {
        match self.answer.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }

    pub(super) fn wait(self) -> Result<WorkResponse, WorkError> {
        self.answer
            .recv()
            .map_err(|mpsc::RecvError| WorkError::WorkerDisconnected)
    }
}

fn jobs() -> Option<&'static mpsc::Sender<Job>> {
    JOBS.get_or_init(|| {
        let (sender, receiver) = mpsc::channel::<Job>();
        let spawned = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || serve(&receiver));
        match spawned {
            Ok(_) => Some(sender),
            Err(err) => {
                log::error!("cannot start {THREAD_NAME} thread: {err}");
                None
            }
        }
    })
    .as_ref()
}

fn serve(jobs: &mpsc::Receiver<Job>) {
    log::debug!("{THREAD_NAME} thread started");
    for (request, answer) in jobs {
        if answer.send(request.handle()).is_err() {
            log::trace!("answer dropped, nobody is waiting");
        }
    }
}

/// Queues `request` behind any solves already waiting.
pub(super) fn enqueue(request: WorkRequest) -> Result<WorkHandle, WorkError> {
    let jobs = jobs().ok_or(WorkError::WorkerUnavailable)?;
    let (answer_tx, answer) = mpsc::sync_channel(1);
    jobs.send((request, answer_tx))
        .map_err(|_| WorkError::WorkerDisconnected)?;
    Ok(WorkHandle { answer })
}
