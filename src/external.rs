//! Bridge to an external IRI worker process
use log::{debug, error, warn};

use std::{
    io::{BufRead, BufReader, BufWriter, Write},
    process::{Child, ChildStdin, ChildStdout, Command, ExitStatus, Stdio},
    thread::sleep,
    time::{Duration, Instant},
};

use crate::prelude::{ElectronDensity, ElectronDensityModel, ModelError, SpaceTimePoint};

/// Time granted to the worker to exit on its own, once asked to terminate.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// [ExternalModel] delegates evaluation to a child process that speaks the
/// line oriented query protocol (for example a pyglow based IRI worker):
/// 8 query lines and a termination flag in, one density (in cm^-3) out.
///
/// The worker lives as long as this [ExternalModel]. On shutdown, the last
/// evaluated point is sent again with a nonzero termination flag, so the worker
/// exits like it would at the end of any regular session, then its input is closed.
/// A worker still running after [SHUTDOWN_GRACE_PERIOD] is killed.
/// Answers are awaited without timeout.
///
/// Non finite answers are passed through, they are rejected by the query loop.
#[derive(Debug)]
pub struct ExternalModel {
    /// Worker command line, for logging purposes
    command: String,
    child: Child,
    to_worker: Option<BufWriter<ChildStdin>>,
    from_worker: BufReader<ChildStdout>,
    last_point: Option<SpaceTimePoint>,
    status: Option<ExitStatus>,
}

fn write_request<W: Write>(
    writer: &mut W,
    point: &SpaceTimePoint,
    terminate: bool,
) -> std::io::Result<()> {
    let (y, m, d, hh, mm, _, _) = point.epoch.to_gregorian_utc();

    writeln!(writer, "{}", y)?;
    writeln!(writer, "{}", m)?;
    writeln!(writer, "{}", d)?;
    writeln!(writer, "{}", hh)?;
    writeln!(writer, "{}", mm)?;
    writeln!(writer, "{}", point.latitude_ddeg())?;
    writeln!(writer, "{}", point.longitude_ddeg())?;
    writeln!(writer, "{}", point.altitude_km)?;
    writeln!(writer, "{}", if terminate { 1 } else { 0 })?;

    // worker must receive the whole request before we wait for its answer
    writer.flush()
}

impl ExternalModel {
    /// Starts the external worker `program` with given `args`.
    /// Worker errors are forwarded to our own stderr.
    pub fn spawn<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Self, ModelError> {
        let args = args.iter().map(|arg| arg.as_ref()).collect::<Vec<_>>();
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ModelError::Spawn {
                program: command.clone(),
                source,
            })?;

        let (stdin, stdout) = match (child.stdin.take(), child.stdout.take()) {
            (Some(stdin), Some(stdout)) => (stdin, stdout),
            _ => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ModelError::WorkerClosed);
            },
        };

        debug!("spawned model worker \"{}\" (pid={})", command, child.id());

        Ok(Self {
            command,
            child,
            to_worker: Some(BufWriter::new(stdin)),
            from_worker: BufReader::new(stdout),
            last_point: None,
            status: None,
        })
    }

    /// Worker command line
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Terminates the worker and returns its [ExitStatus].
    pub fn shutdown(mut self) -> Result<ExitStatus, ModelError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<ExitStatus, ModelError> {
        if let Some(status) = self.status {
            return Ok(status);
        }

        if let Some(mut writer) = self.to_worker.take() {
            if let Some(point) = self.last_point.take() {
                // the answer is left unread in the pipe
                if let Err(e) = write_request(&mut writer, &point, true) {
                    debug!("failed to request \"{}\" termination: {}", self.command, e);
                }
            }
            // closing stdin signals end of input to the worker
        }

        let deadline = Instant::now() + SHUTDOWN_GRACE_PERIOD;

        let status = loop {
            if let Some(status) = self.child.try_wait()? {
                break status;
            }

            if Instant::now() >= deadline {
                warn!("model worker \"{}\" did not exit, killing it", self.command);
                self.child.kill()?;
                break self.child.wait()?;
            }

            sleep(Duration::from_millis(10));
        };

        debug!("model worker \"{}\" exited: {}", self.command, status);
        self.status = Some(status);
        Ok(status)
    }

    fn receive(&mut self) -> Result<ElectronDensity, ModelError> {
        let mut line = String::new();

        if self.from_worker.read_line(&mut line)? == 0 {
            return Err(ModelError::WorkerClosed);
        }

        let content = line.trim();

        let per_cm3 = content
            .parse::<f64>()
            .map_err(|_| ModelError::InvalidResponse(content.to_string()))?;

        Ok(ElectronDensity::from_per_cm3(per_cm3))
    }
}

impl ElectronDensityModel for ExternalModel {
    fn electron_density(
        &mut self,
        point: &SpaceTimePoint,
    ) -> Result<ElectronDensity, ModelError> {
        let writer = self.to_worker.as_mut().ok_or(ModelError::WorkerClosed)?;
        write_request(writer, point, false)?;
        self.last_point = Some(*point);
        self.receive()
    }

    fn name(&self) -> &'static str {
        "external"
    }

    fn description(&self) -> &'static str {
        "IRI evaluated by an external worker process"
    }
}

impl Drop for ExternalModel {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            error!("failed to stop model worker \"{}\": {}", self.command, e);
        }
    }
}
