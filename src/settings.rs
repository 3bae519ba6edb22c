//! Setting catalog and resolved-settings model.
//!
//! Every packaging setting has a dotted property key and a default template
//! that may reference earlier settings (or externally seeded keys such as
//! `java.home` and `project.build.directory`) with `${name}` placeholders.
//! The catalog order is a deliberate forward-only dependency chain: each
//! default only references names that are already in the store by the time
//! the setting is resolved.

/// The Oracle Middleware Home (root of the middleware install).
pub const PROP_MW_HOME: &str = "osbconfig.mwhome";
pub const DEFAULT_MW_HOME: &str = "${osbconfig.mwhome}";

/// The ORACLE_HOME of the OSB install.
pub const PROP_OSB_HOME: &str = "osbconfig.osbhome";
pub const DEFAULT_OSB_HOME: &str = "${osbconfig.mwhome}/Oracle_OSB1";

/// Two point WebLogic version. Only tested with 10.3.6, e.g. 10.3.
pub const PROP_WL_VER: &str = "osbconfig.wlver";
pub const DEFAULT_WL_VER: &str = "10.3";

/// The WL_HOME of the WebLogic server install.
pub const PROP_WL_HOME: &str = "osbconfig.wlhome";
pub const DEFAULT_WL_HOME: &str = "${osbconfig.mwhome}/wlserver_${osbconfig.wlver}";

/// The BEA_HOME, typically the MW_HOME.
pub const PROP_BEA_HOME: &str = "osbconfig.beahome";
pub const DEFAULT_BEA_HOME: &str = "${osbconfig.mwhome}/";

/// The middleware's modules dir.
pub const PROP_MW_MODULES_DIR: &str = "osbconfig.mwmodulesdir";
pub const DEFAULT_MW_MODULES_DIR: &str = "${osbconfig.mwhome}/modules";

/// The middleware features dir under the modules dir.
pub const PROP_MW_FEATURES_DIR: &str = "osbconfig.mwfeaturesdir";
pub const DEFAULT_MW_FEATURES_DIR: &str = "${osbconfig.mwmodulesdir}/features";

/// Typically OSB_HOME/tools/configjar.
pub const PROP_CONFIGJAR_DIR: &str = "osbconfig.configjardir";
pub const DEFAULT_CONFIGJAR_DIR: &str = "${osbconfig.osbhome}/tools/configjar";

/// Optional JAVA_HOME to use. Defaults to the invoking environment's.
pub const PROP_JAVA_HOME: &str = "osbconfig.javahome";
pub const DEFAULT_JAVA_HOME: &str = "${java.home}/";

/// The explicit java executable. A bare name falls back to PATH lookup.
pub const PROP_JAVA_EXE: &str = "osbconfig.javaexe";
pub const DEFAULT_JAVA_EXE: &str = "${osbconfig.javahome}/bin/java";

/// Root of the scratch area used for a packaging run.
pub const PROP_WORK_ROOT: &str = "osbconfig.workroot";
pub const DEFAULT_WORK_ROOT: &str = "${project.build.directory}/osbconfig-workdir";

/// Temp dir handed to the tool via TEMP/TMP.
pub const PROP_TMP_DIR: &str = "osbconfig.tmpdir";
pub const DEFAULT_TMP_DIR: &str = "${osbconfig.workroot}/tmp";

/// Working directory the tool is launched in.
pub const PROP_WORK_DIR: &str = "osbconfig.workdir";
pub const DEFAULT_WORK_DIR: &str = "${osbconfig.workroot}/run";

/// The configjar settings file. Must exist before a run.
pub const PROP_SETTINGS_FILE: &str = "osbconfig.settingsfile";
pub const DEFAULT_SETTINGS_FILE: &str = "${osbconfig.workroot}/etc/settings.xml";

/// Store key for the java home of the invoking environment.
pub const PROP_HOST_JAVA_HOME: &str = "java.home";

/// Store key for the build output directory supplied by the host.
pub const PROP_BUILD_DIRECTORY: &str = "project.build.directory";

/// Caller-supplied setting values, prior to resolution.
///
/// `None` means the caller left the setting unset; the resolver substitutes
/// the default template (and logs the substitution).
#[derive(Debug, Clone, Default)]
pub struct SettingOverrides {
    pub mw_home: Option<String>,
    pub osb_home: Option<String>,
    pub wl_ver: Option<String>,
    pub wl_home: Option<String>,
    pub bea_home: Option<String>,
    pub mw_modules_dir: Option<String>,
    pub mw_features_dir: Option<String>,
    pub configjar_dir: Option<String>,
    pub java_home: Option<String>,
    pub java_exe: Option<String>,
    pub work_root: Option<String>,
    pub tmp_dir: Option<String>,
    pub work_dir: Option<String>,
    pub settings_file: Option<String>,
}

/// Final string values for every setting, in hand after the resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub mw_home: String,
    pub osb_home: String,
    pub wl_ver: String,
    pub wl_home: String,
    pub bea_home: String,
    pub mw_modules_dir: String,
    pub mw_features_dir: String,
    pub configjar_dir: String,
    pub java_home: String,
    pub java_exe: String,
    pub work_root: String,
    pub tmp_dir: String,
    pub work_dir: String,
    pub settings_file: String,
}

impl ResolvedSettings {
    /// Key/value pairs in catalog (resolution) order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            (PROP_MW_HOME, self.mw_home.as_str()),
            (PROP_OSB_HOME, self.osb_home.as_str()),
            (PROP_WL_VER, self.wl_ver.as_str()),
            (PROP_WL_HOME, self.wl_home.as_str()),
            (PROP_BEA_HOME, self.bea_home.as_str()),
            (PROP_MW_MODULES_DIR, self.mw_modules_dir.as_str()),
            (PROP_MW_FEATURES_DIR, self.mw_features_dir.as_str()),
            (PROP_CONFIGJAR_DIR, self.configjar_dir.as_str()),
            (PROP_JAVA_HOME, self.java_home.as_str()),
            (PROP_JAVA_EXE, self.java_exe.as_str()),
            (PROP_WORK_ROOT, self.work_root.as_str()),
            (PROP_TMP_DIR, self.tmp_dir.as_str()),
            (PROP_WORK_DIR, self.work_dir.as_str()),
            (PROP_SETTINGS_FILE, self.settings_file.as_str()),
        ]
    }
}
