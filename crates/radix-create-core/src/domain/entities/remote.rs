//! Degit-style remote references.
//!
//! Grammar: `[site:]user/repo[/sub/dir][#ref]`, where the site may also be
//! given as `https://<host>/` or `git@<host>:`. Without a site the reference
//! points at GitHub; without a ref it points at `HEAD`.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Hosting service a reference resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Github,
    Gitlab,
    Bitbucket,
}

impl Site {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Bitbucket => "bitbucket",
        }
    }

    pub const fn host(&self) -> &'static str {
        match self {
            Self::Github => "github.com",
            Self::Gitlab => "gitlab.com",
            Self::Bitbucket => "bitbucket.org",
        }
    }

    fn from_name(name: &str) -> Result<Self, DomainError> {
        match name.to_ascii_lowercase().as_str() {
            "github" | "github.com" => Ok(Self::Github),
            "gitlab" | "gitlab.com" => Ok(Self::Gitlab),
            "bitbucket" | "bitbucket.org" => Ok(Self::Bitbucket),
            other => Err(DomainError::UnsupportedSite { site: other.into() }),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed template location: repository, optional subdirectory and ref.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteReference {
    pub site: Site,
    pub user: String,
    pub repo: String,
    /// Path inside the repository, without leading or trailing slashes.
    pub subdir: Option<String>,
    pub git_ref: String,
}

impl RemoteReference {
    pub const DEFAULT_REF: &'static str = "HEAD";

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidRemoteReference {
            reference: raw.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = raw.trim();
        let (location, git_ref) = match trimmed.split_once('#') {
            Some((_, "")) => return Err(invalid("empty ref after '#'")),
            Some((location, git_ref)) => (location, git_ref.to_string()),
            None => (trimmed, Self::DEFAULT_REF.to_string()),
        };

        let (site, path) = split_site(location)?;

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let user = segments.next().ok_or_else(|| invalid("missing user"))?;
        let repo = segments.next().ok_or_else(|| invalid("missing repository"))?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        let rest: Vec<&str> = segments.collect();
        if [user, repo]
            .iter()
            .chain(rest.iter())
            .any(|s| s.chars().any(char::is_whitespace))
        {
            return Err(invalid("path segments cannot contain whitespace"));
        }
        if rest.iter().any(|s| *s == "..") {
            return Err(invalid("subdirectory cannot contain '..'"));
        }

        Ok(Self {
            site,
            user: user.to_string(),
            repo: repo.to_string(),
            subdir: (!rest.is_empty()).then(|| rest.join("/")),
            git_ref,
        })
    }

    /// URL of the gzipped tarball for this reference's repository and ref.
    pub fn tarball_url(&self) -> String {
        let Self {
            user, repo, git_ref, ..
        } = self;
        match self.site {
            Site::Github => format!("https://github.com/{user}/{repo}/archive/{git_ref}.tar.gz"),
            Site::Gitlab => format!(
                "https://gitlab.com/{user}/{repo}/-/archive/{git_ref}/{repo}-{git_ref}.tar.gz"
            ),
            Site::Bitbucket => format!("https://bitbucket.org/{user}/{repo}/get/{git_ref}.tar.gz"),
        }
    }
}

/// Split an optional site prefix from `user/repo/...`.
fn split_site(location: &str) -> Result<(Site, &str), DomainError> {
    if let Some(rest) = location
        .strip_prefix("https://")
        .or_else(|| location.strip_prefix("http://"))
    {
        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        return Ok((Site::from_name(host)?, path));
    }
    if let Some(rest) = location.strip_prefix("git@") {
        let (host, path) = rest
            .split_once(':')
            .or_else(|| rest.split_once('/'))
            .unwrap_or((rest, ""));
        return Ok((Site::from_name(host)?, path));
    }
    match location.split_once(':') {
        Some((site, path)) if !site.contains('/') => Ok((Site::from_name(site)?, path)),
        _ => Ok((Site::Github, location)),
    }
}

impl FromStr for RemoteReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RemoteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.site != Site::Github {
            write!(f, "{}:", self.site)?;
        }
        write!(f, "{}/{}", self.user, self.repo)?;
        if let Some(subdir) = &self.subdir {
            write!(f, "/{subdir}")?;
        }
        if self.git_ref != Self::DEFAULT_REF {
            write!(f, "#{}", self.git_ref)?;
        }
        Ok(())
    }
}
