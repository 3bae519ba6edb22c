//! Classpath assembly from the fixed candidate catalog.
//!
//! The catalog lists every jar and resource bundle the configjar tool may
//! need, each relative to one of the resolved install roots. Candidates
//! missing from the filesystem are skipped with a warning; the tool itself
//! complains if something it actually needs is absent.

use crate::settings::ResolvedSettings;
use std::path::Path;
use tracing::{debug, warn};

/// Separator between classpath entries on this platform.
pub const CLASSPATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Which resolved install root a candidate hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    MwHome,
    WlHome,
    OsbHome,
    ConfigJarDir,
}

/// A catalog item: install root plus fixed relative path.
struct Candidate {
    root: Root,
    rel: &'static str,
}

const CATALOG: &[Candidate] = &[
    Candidate { root: Root::MwHome, rel: "modules/features/weblogic.server.modules_10.3.6.0.jar" },
    Candidate { root: Root::WlHome, rel: "server/lib/weblogic.jar" },
    Candidate { root: Root::MwHome, rel: "oracle_common/modules/oracle.http_client_11.1.1.jar" },
    Candidate { root: Root::MwHome, rel: "oracle_common/modules/oracle.xdk_11.1.0/xmlparserv2.jar" },
    Candidate { root: Root::MwHome, rel: "oracle_common/modules/oracle.webservices_11.1.1/orawsdl.jar" },
    Candidate { root: Root::MwHome, rel: "oracle_common/modules/oracle.wsm.common_11.1.1/wsm-dependencies.jar" },
    Candidate { root: Root::OsbHome, rel: "modules/features/osb.server.modules_11.1.1.7.jar" },
    Candidate { root: Root::OsbHome, rel: "soa/modules/oracle.soa.common.adapters_11.1.1/oracle.soa.common.adapters.jar" },
    Candidate { root: Root::OsbHome, rel: "lib/external/log4j_1.2.8.jar" },
    Candidate { root: Root::OsbHome, rel: "lib/alsb.jar" },
    Candidate { root: Root::ConfigJarDir, rel: "configjar.jar" },
    Candidate { root: Root::ConfigJarDir, rel: "L10N" },
];

/// Assemble the classpath string from the candidates present on disk.
///
/// Candidates are checked in catalog order and joined with the platform
/// separator. Returns `None` when no candidate exists at all, so an empty
/// classpath is distinguishable from an empty string.
pub fn assemble_classpath(settings: &ResolvedSettings) -> Option<String> {
    let mut classpath = String::new();
    let mut empty = true;

    for candidate in CATALOG {
        let base = match candidate.root {
            Root::MwHome => &settings.mw_home,
            Root::WlHome => &settings.wl_home,
            Root::OsbHome => &settings.osb_home,
            Root::ConfigJarDir => &settings.configjar_dir,
        };
        let entry = Path::new(base).join(candidate.rel);

        if !entry.exists() {
            warn!("{} does not exist, not adding to classpath", entry.display());
            continue;
        }

        debug!("adding to classpath: {}", entry.display());
        if !empty {
            classpath.push(CLASSPATH_SEPARATOR);
        }
        empty = false;
        classpath.push_str(&entry.to_string_lossy());
    }

    if empty { None } else { Some(classpath) }
}
