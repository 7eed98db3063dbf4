#![doc(
    html_logo_url = "https://raw.githubusercontent.com/nav-solutions/.github/master/logos/logo2.jpg"
)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * IRI-Query is part of the nav-solutions framework.
 *
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * (cf. https://github.com/nav-solutions/iri-query/graphs/contributors),
 * licensed under Mozilla Public license V2.
 *
 * Documentation: https://github.com/nav-solutions/iri-query
 */

pub mod chapman;
pub mod density;
pub mod error;
pub mod external;
pub mod model;
pub mod query;
pub mod reader;
pub mod runner;

mod solar;

#[cfg(test)]
mod tests;

pub mod prelude {
    // export
    pub use crate::{
        chapman::{ChapmanModel, ChapmanParameters},
        density::{DensityUnit, ElectronDensity},
        error::{Error, ModelError, ParsingError},
        external::ExternalModel,
        model::ElectronDensityModel,
        query::{Query, SpaceTimePoint},
        reader::{QueryReader, Request},
        runner::QueryLoop,
    };

    // pub re-export
    pub use geo::Point;
    pub use hifitime::{Epoch, TimeScale};
}
