//! Settings resolution: the post-process pass over the setting catalog.
//!
//! Each setting is resolved once, in catalog order, so that by the time a
//! default template is expanded every name it references is already in the
//! store. Expansion is only attempted when the caller did not override the
//! setting — detected by the current value being textually identical to the
//! default template. An override that happens to equal the literal default
//! is indistinguishable from "not overridden" and is expanded too; callers
//! that need to force a literal must pick a value that differs from the
//! template.
//!
//! Expansion failure is recoverable: the literal template is kept and a
//! warning is logged. The only fatal condition in the pass is a broken
//! catalog invariant (an empty default template).

mod expand;

pub use expand::{ExpandError, expand};

use crate::error::{OsbConfigError, Result};
use crate::settings::{
    DEFAULT_BEA_HOME, DEFAULT_CONFIGJAR_DIR, DEFAULT_JAVA_EXE, DEFAULT_JAVA_HOME,
    DEFAULT_MW_FEATURES_DIR, DEFAULT_MW_HOME, DEFAULT_MW_MODULES_DIR, DEFAULT_OSB_HOME,
    DEFAULT_SETTINGS_FILE, DEFAULT_TMP_DIR, DEFAULT_WL_HOME, DEFAULT_WL_VER, DEFAULT_WORK_DIR,
    DEFAULT_WORK_ROOT, PROP_BEA_HOME, PROP_CONFIGJAR_DIR, PROP_JAVA_EXE, PROP_JAVA_HOME,
    PROP_MW_FEATURES_DIR, PROP_MW_HOME, PROP_MW_MODULES_DIR, PROP_OSB_HOME, PROP_SETTINGS_FILE,
    PROP_TMP_DIR, PROP_WL_HOME, PROP_WL_VER, PROP_WORK_DIR, PROP_WORK_ROOT, ResolvedSettings,
    SettingOverrides,
};
use crate::store::PropertyStore;
use tracing::{debug, warn};

/// Expression-evaluation capability.
///
/// Production code uses [`StoreEvaluator`]; tests substitute fakes to pin
/// down when expansion is (and is not) attempted.
pub trait Evaluator {
    fn evaluate(&self, input: &str, values: &PropertyStore) -> std::result::Result<String, ExpandError>;
}

/// Evaluator that expands `${name}` placeholders against the store.
pub struct StoreEvaluator;

impl Evaluator for StoreEvaluator {
    fn evaluate(&self, input: &str, values: &PropertyStore) -> std::result::Result<String, ExpandError> {
        expand(input, values)
    }
}

/// Resolve a single setting to its final string value.
///
/// Mirrors the decision rule documented at module level: substitute the
/// default when the current value is absent, expand only on an exact match
/// with the default template, keep the literal on evaluation failure, and
/// record the result in the store unless the key is already present (the
/// store wins).
pub fn resolve_setting(
    store: &mut PropertyStore,
    evaluator: &dyn Evaluator,
    key: &str,
    current: Option<&str>,
    default_template: &str,
) -> Result<String> {
    debug!("about to post process {key}, current value: {current:?}");

    if default_template.is_empty() {
        return Err(OsbConfigError::Resolve(format!(
            "default value for {key} is empty"
        )));
    }

    let mut value = match current {
        Some(v) => v.to_string(),
        None => {
            warn!("no value supplied for {key}, falling back to {default_template}");
            default_template.to_string()
        }
    };

    if value == default_template {
        match evaluator.evaluate(&value, store) {
            Ok(expanded) if !expanded.is_empty() => value = expanded,
            Ok(_) => warn!("evaluating {key} produced an empty result, keeping {value}"),
            Err(e) => warn!("unable to set {key}, failed to evaluate {value}: {e}"),
        }
    }

    store.set_if_absent(key, &value);

    debug!("done with post process {key}, final value: {value}");
    Ok(value)
}

/// Run the full resolution pass in catalog order.
///
/// mwHome has no dependencies and goes first; every later default only
/// references names that are in the store by the time it is expanded.
pub fn resolve_all(
    store: &mut PropertyStore,
    evaluator: &dyn Evaluator,
    overrides: &SettingOverrides,
) -> Result<ResolvedSettings> {
    let o = overrides;
    let mut step = |key: &str, current: Option<&str>, template: &str| {
        resolve_setting(store, evaluator, key, current, template)
    };

    let mw_home = step(PROP_MW_HOME, o.mw_home.as_deref(), DEFAULT_MW_HOME)?;
    let osb_home = step(PROP_OSB_HOME, o.osb_home.as_deref(), DEFAULT_OSB_HOME)?;
    let wl_ver = step(PROP_WL_VER, o.wl_ver.as_deref(), DEFAULT_WL_VER)?;
    let wl_home = step(PROP_WL_HOME, o.wl_home.as_deref(), DEFAULT_WL_HOME)?;
    let bea_home = step(PROP_BEA_HOME, o.bea_home.as_deref(), DEFAULT_BEA_HOME)?;
    let mw_modules_dir = step(
        PROP_MW_MODULES_DIR,
        o.mw_modules_dir.as_deref(),
        DEFAULT_MW_MODULES_DIR,
    )?;
    let mw_features_dir = step(
        PROP_MW_FEATURES_DIR,
        o.mw_features_dir.as_deref(),
        DEFAULT_MW_FEATURES_DIR,
    )?;
    let configjar_dir = step(
        PROP_CONFIGJAR_DIR,
        o.configjar_dir.as_deref(),
        DEFAULT_CONFIGJAR_DIR,
    )?;
    let java_home = step(PROP_JAVA_HOME, o.java_home.as_deref(), DEFAULT_JAVA_HOME)?;
    let java_exe = step(PROP_JAVA_EXE, o.java_exe.as_deref(), DEFAULT_JAVA_EXE)?;
    let work_root = step(PROP_WORK_ROOT, o.work_root.as_deref(), DEFAULT_WORK_ROOT)?;
    let tmp_dir = step(PROP_TMP_DIR, o.tmp_dir.as_deref(), DEFAULT_TMP_DIR)?;
    let work_dir = step(PROP_WORK_DIR, o.work_dir.as_deref(), DEFAULT_WORK_DIR)?;
    let settings_file = step(
        PROP_SETTINGS_FILE,
        o.settings_file.as_deref(),
        DEFAULT_SETTINGS_FILE,
    )?;

    Ok(ResolvedSettings {
        mw_home,
        osb_home,
        wl_ver,
        wl_home,
        bea_home,
        mw_modules_dir,
        mw_features_dir,
        configjar_dir,
        java_home,
        java_exe,
        work_root,
        tmp_dir,
        work_dir,
        settings_file,
    })
}
