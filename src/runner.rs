use log::{debug, info};

use std::io::{BufRead, Write};

use crate::prelude::{
    DensityUnit, ElectronDensity, ElectronDensityModel, Error, ModelError, Query, QueryReader,
};

/// [QueryLoop] answers [crate::prelude::Request]s read from an input stream,
/// one line of output per request, until a termination flag is received.
pub struct QueryLoop<M: ElectronDensityModel> {
    model: M,
    unit: DensityUnit,
}

impl<M: ElectronDensityModel> QueryLoop<M> {
    /// Builds a new [QueryLoop] reporting densities in desired [DensityUnit].
    pub fn new(model: M, unit: DensityUnit) -> Self {
        Self { model, unit }
    }

    /// Returns reference to the underlying model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Evaluates a single [Query], without any I/O.
    /// Non finite estimates are rejected, whatever the model.
    pub fn evaluate(&mut self, query: &Query) -> Result<ElectronDensity, Error> {
        let point = query.space_time_point()?;
        let ne = self.model.electron_density(&point)?;

        if !ne.is_finite() {
            return Err(ModelError::NonFinite.into());
        }

        Ok(ne)
    }

    /// Runs the loop until a request carries a nonzero termination flag.
    /// Every answer is flushed right away, so a piped consumer receives it
    /// before the next request is read.
    /// Returns the number of answered requests. Any error aborts the loop,
    /// the failing request produces no output.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<usize, Error> {
        let mut reader = QueryReader::new(input);
        let mut answered = 0;

        info!(
            "{} model: {} (unit: {})",
            self.model.name(),
            self.model.description(),
            self.unit
        );

        loop {
            let request = reader.next_request()?;

            let ne = self.evaluate(&request.query)?;

            writeln!(output, "{}", ne.value(self.unit))?;
            output.flush()?;

            answered += 1;
            debug!("answered request #{}", answered);

            if request.terminate {
                break;
            }
        }

        Ok(answered)
    }
}
