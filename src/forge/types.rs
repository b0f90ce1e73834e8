use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Author of a release as reported by the lookup API.
pub struct ReleaseAuthor {
    pub login: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// The most recent published release of a repository.
pub struct ReleaseRecord {
    pub tag_name: String,
    pub name: Option<String>,
    /// Markdown body; GitHub returns null for releases without notes
    pub body: Option<String>,
    pub author: Option<ReleaseAuthor>,
}

impl ReleaseRecord {
    /// Author login, if the release has an author with a non-empty login.
    pub fn author_login(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| author.login.as_deref())
            .filter(|login| !login.is_empty())
    }
}
