//! Uploading per-language glossary files to a Weblate glossary component.
//!
//! The sequence per file is fixed: make sure the language exists on the
//! component, upload with `method=add` (new terms), then upload again with
//! `method=translate` (translations of existing terms). There are no retries
//! and nothing is rolled back when a later call fails.

use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use reqwest::{
    blocking::multipart::{Form, Part},
    header::AUTHORIZATION,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    config::ClientConfig,
    error::Error,
    language::{language_from_path, weblate_language_code},
};

/// A component addressed as `project/component`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPath {
    pub project: String,
    pub component: String,
}

impl FromStr for ComponentPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('/');
        match s.split_once('/') {
            Some((project, component))
                if !project.is_empty() && !component.is_empty() && !component.contains('/') =>
            {
                Ok(ComponentPath {
                    project: project.to_string(),
                    component: component.to_string(),
                })
            }
            _ => Err(Error::InvalidComponent(s.to_string())),
        }
    }
}

impl Display for ComponentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project, self.component)
    }
}

/// The parts of the component metadata the uploader looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Component {
    pub is_glossary: bool,
    pub web_url: String,
}

/// Conflict handling of a file upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMethod {
    /// Add new strings only.
    Add,
    /// Fill in translations of existing strings.
    Translate,
}

impl UploadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadMethod::Add => "add",
            UploadMethod::Translate => "translate",
        }
    }
}

impl Display for UploadMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status and raw body of an API call whose outcome is only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The Weblate endpoints used for glossary uploads.
pub trait WeblateApi {
    /// The component all calls address.
    fn component_path(&self) -> &ComponentPath;

    /// `GET /api/components/{project}/{component}/`
    fn component(&self) -> Result<Component, Error>;

    /// `POST /api/components/{project}/{component}/translations/`
    fn create_translation(&self, language: &str) -> Result<ApiResponse, Error>;

    /// `POST /api/translations/{project}/{component}/{language}/file/`
    fn upload_file(
        &self,
        language: &str,
        file_name: &str,
        data: Vec<u8>,
        method: UploadMethod,
    ) -> Result<ApiResponse, Error>;
}

/// Blocking HTTP client for one component.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    component: ComponentPath,
}

impl Client {
    pub fn new(config: ClientConfig, component: ComponentPath) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("txglossary/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config,
            component,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.config.base_url(), path)
    }

    fn into_api_response(response: reqwest::blocking::Response) -> Result<ApiResponse, Error> {
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }
}

impl WeblateApi for Client {
    fn component_path(&self) -> &ComponentPath {
        &self.component
    }

    fn component(&self) -> Result<Component, Error> {
        let response = self
            .http
            .get(self.url(&format!("components/{}/", self.component)))
            .header(AUTHORIZATION, self.config.authorization())
            .send()?;
        let ApiResponse { status, body } = Self::into_api_response(response)?;
        serde_json::from_str(&body).map_err(|e| {
            error!(component = %self.component, status, "Failed loading component");
            Error::Parse(e)
        })
    }

    fn create_translation(&self, language: &str) -> Result<ApiResponse, Error> {
        let response = self
            .http
            .post(self.url(&format!("components/{}/translations/", self.component)))
            .header(AUTHORIZATION, self.config.authorization())
            .json(&json!({ "language_code": language }))
            .send()?;
        Self::into_api_response(response)
    }

    fn upload_file(
        &self,
        language: &str,
        file_name: &str,
        data: Vec<u8>,
        method: UploadMethod,
    ) -> Result<ApiResponse, Error> {
        let form = Form::new()
            .part("file", Part::bytes(data).file_name(file_name.to_string()))
            .text("conflicts", "ignore")
            .text("method", method.as_str());
        let response = self
            .http
            .post(self.url(&format!(
                "translations/{}/{}/file/",
                self.component, language
            )))
            .header(AUTHORIZATION, self.config.authorization())
            .multipart(form)
            .send()?;
        Self::into_api_response(response)
    }
}

/// What happened to one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub file_name: String,
    /// Weblate language code the file was uploaded under.
    pub language: String,
    /// Whether the language was created by this run.
    pub created: bool,
    pub add: ApiResponse,
    pub translate: ApiResponse,
}

/// Result of [`push_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    pub web_url: String,
    pub files: Vec<FileOutcome>,
}

/// Progress of [`push_files_with`], reported as it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushEvent<'a> {
    /// The component was found to be a glossary; nothing uploaded yet.
    Component(&'a Component),
    /// One upload finished, successful or not.
    Uploaded {
        file_name: &'a str,
        language: &'a str,
        method: UploadMethod,
        response: &'a ApiResponse,
    },
}

/// Uploads `files` to the glossary component behind `api`.
///
/// Fails with [`Error::NotAGlossary`] before reading any file if the
/// component is a regular one. Failing to create a language and non-2xx
/// upload responses are logged and skipped; unreadable files, transport
/// errors on upload and malformed component metadata end the run.
pub fn push_files<A, P>(api: &A, files: &[P]) -> Result<PushReport, Error>
where
    A: WeblateApi,
    P: AsRef<Path>,
{
    push_files_with(api, files, |_| {})
}

/// Like [`push_files`], calling `on_event` for the component and after
/// every upload, so progress survives a later fatal error.
pub fn push_files_with<A, P, F>(
    api: &A,
    files: &[P],
    mut on_event: F,
) -> Result<PushReport, Error>
where
    A: WeblateApi,
    P: AsRef<Path>,
    F: FnMut(PushEvent<'_>),
{
    let component_path = api.component_path().to_string();
    let component = api.component()?;
    if !component.is_glossary {
        return Err(Error::NotAGlossary(component_path));
    }
    on_event(PushEvent::Component(&component));

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let path = path.as_ref();
        let (file_name, language) = match (
            path.file_name().and_then(|name| name.to_str()),
            language_from_path(path),
        ) {
            (Some(file_name), Some(language)) => {
                (file_name.to_string(), weblate_language_code(&language))
            }
            _ => return Err(Error::InvalidPath(path.display().to_string())),
        };
        info!("Processing {} (language {})...", path.display(), language);
        let data = fs::read(path)?;

        let created = match api.create_translation(&language) {
            Ok(response) if matches!(response.status, 200 | 201) => {
                info!("Created language {} for component {}", language, component_path);
                true
            }
            Ok(response) => {
                warn!(
                    status = response.status,
                    body = %response.body,
                    "Failed creating language {} for component {}",
                    language,
                    component_path
                );
                false
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "Failed creating language {} for component {}",
                    language,
                    component_path
                );
                false
            }
        };

        let add = upload(api, &language, &file_name, data.clone(), UploadMethod::Add)?;
        on_event(PushEvent::Uploaded {
            file_name: &file_name,
            language: &language,
            method: UploadMethod::Add,
            response: &add,
        });
        let translate = upload(api, &language, &file_name, data, UploadMethod::Translate)?;
        on_event(PushEvent::Uploaded {
            file_name: &file_name,
            language: &language,
            method: UploadMethod::Translate,
            response: &translate,
        });

        outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            file_name,
            language,
            created,
            add,
            translate,
        });
    }

    Ok(PushReport {
        web_url: component.web_url,
        files: outcomes,
    })
}

fn upload<A: WeblateApi>(
    api: &A,
    language: &str,
    file_name: &str,
    data: Vec<u8>,
    method: UploadMethod,
) -> Result<ApiResponse, Error> {
    let response = api.upload_file(language, file_name, data, method)?;
    if response.is_success() {
        info!(status = response.status, "Uploaded file {} ({})", file_name, method);
    } else {
        warn!(
            status = response.status,
            body = %response.body,
            "Upload of {} ({}) was rejected",
            file_name,
            method
        );
    }
    Ok(response)
}
