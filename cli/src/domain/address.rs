//! Hierarchical launcher addresses: `host/app[/instance[/resource]]`.
//!
//! One grammar, four shapes. Every address is validated here, synchronously,
//! before anything is sent to the launcher.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::AddressError;

/// Glob metacharacters understood by the launcher's listing endpoint.
pub const PATTERN_CHARS: [char; 2] = ['*', '?'];

const HOST: &str = "hostName";
const APP: &str = "appId";
const RESOURCE: &str = "resName";

/// The four address grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// `hostPattern/appPattern`, globs allowed.
    AppPattern,
    /// `hostName/appId`.
    AppPath,
    /// `hostName/appId/instanceId`.
    InstancePath,
    /// `hostName/appId/instanceId/resName`.
    ResourcePath,
}

impl AddressKind {
    /// Number of `/`-separated segments.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::AppPattern | Self::AppPath => 2,
            Self::InstancePath => 3,
            Self::ResourcePath => 4,
        }
    }

    /// Only the listing grammar accepts `*` and `?`.
    #[must_use]
    pub const fn allows_patterns(self) -> bool {
        matches!(self, Self::AppPattern)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::AppPattern => "app pattern",
            Self::AppPath => "app path",
            Self::InstancePath => "instance path",
            Self::ResourcePath => "resource path",
        }
    }
}

// ── Address shapes ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPattern {
    pub host_pattern: String,
    pub app_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPath {
    pub host_name: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstancePath {
    pub host_name: String,
    pub app_id: String,
    pub instance_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    pub host_name: String,
    pub app_id: String,
    pub instance_id: u32,
    pub res_name: String,
}

/// Any parsed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    AppPattern(AppPattern),
    App(AppPath),
    Instance(InstancePath),
    Resource(ResourcePath),
}

/// Parse `raw` according to `kind`.
///
/// # Errors
///
/// Returns an [`AddressError`] when the segment count does not match the
/// kind's arity, a name segment is empty or carries a forbidden glob
/// character, or the instance id is not a positive integer.
pub fn parse(raw: &str, kind: AddressKind) -> Result<Address, AddressError> {
    Ok(match kind {
        AddressKind::AppPattern => Address::AppPattern(raw.parse()?),
        AddressKind::AppPath => Address::App(raw.parse()?),
        AddressKind::InstancePath => Address::Instance(raw.parse()?),
        AddressKind::ResourcePath => Address::Resource(raw.parse()?),
    })
}

fn segments<const N: usize>(raw: &str, kind: AddressKind) -> Result<[&str; N], AddressError> {
    let parts: Vec<&str> = raw.split('/').collect();
    <[&str; N]>::try_from(parts).map_err(|_| AddressError::MalformedPath {
        kind: kind.label(),
        path: raw.to_string(),
        expected: kind.arity(),
    })
}

fn name_segment(value: &str, field: &'static str, allow_patterns: bool) -> Result<String, AddressError> {
    if value.is_empty() {
        return Err(AddressError::EmptySegment { field });
    }
    if !allow_patterns && value.contains(PATTERN_CHARS) {
        return Err(AddressError::PatternNotAllowed {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

fn instance_segment(value: &str) -> Result<u32, AddressError> {
    match value.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AddressError::InvalidInstanceId(value.to_string())),
    }
}

// ── FromStr ───────────────────────────────────────────────────────────────────

impl FromStr for AppPattern {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let [host, app] = segments(raw, AddressKind::AppPattern)?;
        Ok(Self {
            host_pattern: name_segment(host, HOST, true)?,
            app_pattern: name_segment(app, APP, true)?,
        })
    }
}

impl FromStr for AppPath {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let [host, app] = segments(raw, AddressKind::AppPath)?;
        Ok(Self {
            host_name: name_segment(host, HOST, false)?,
            app_id: name_segment(app, APP, false)?,
        })
    }
}

impl FromStr for InstancePath {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let [host, app, id] = segments(raw, AddressKind::InstancePath)?;
        Ok(Self {
            host_name: name_segment(host, HOST, false)?,
            app_id: name_segment(app, APP, false)?,
            instance_id: instance_segment(id)?,
        })
    }
}

impl FromStr for ResourcePath {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let [host, app, id, res] = segments(raw, AddressKind::ResourcePath)?;
        Ok(Self {
            host_name: name_segment(host, HOST, false)?,
            app_id: name_segment(app, APP, false)?,
            instance_id: instance_segment(id)?,
            res_name: name_segment(res, RESOURCE, false)?,
        })
    }
}

// ── Listing filter ────────────────────────────────────────────────────────────

/// Filter for the listing command: `hostPattern` alone or a full
/// [`AppPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    pub host_pattern: String,
    pub app_pattern: Option<String>,
}

impl FromStr for ListingFilter {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !raw.contains('/') {
            return Ok(Self {
                host_pattern: name_segment(raw, HOST, true)?,
                app_pattern: None,
            });
        }
        let pattern: AppPattern = raw.parse()?;
        Ok(Self {
            host_pattern: pattern.host_pattern,
            app_pattern: Some(pattern.app_pattern),
        })
    }
}

// ── Navigation ────────────────────────────────────────────────────────────────

impl AppPath {
    /// Address of instance `instance_id` of this application.
    #[must_use]
    pub fn instance(&self, instance_id: u32) -> InstancePath {
        InstancePath {
            host_name: self.host_name.clone(),
            app_id: self.app_id.clone(),
            instance_id,
        }
    }
}

impl InstancePath {
    #[must_use]
    pub fn app(&self) -> AppPath {
        AppPath {
            host_name: self.host_name.clone(),
            app_id: self.app_id.clone(),
        }
    }
}

impl ResourcePath {
    #[must_use]
    pub fn instance(&self) -> InstancePath {
        InstancePath {
            host_name: self.host_name.clone(),
            app_id: self.app_id.clone(),
            instance_id: self.instance_id,
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for AppPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host_pattern, self.app_pattern)
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host_name, self.app_id)
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host_name, self.app_id, self.instance_id)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.host_name, self.app_id, self.instance_id, self.res_name
        )
    }
}
