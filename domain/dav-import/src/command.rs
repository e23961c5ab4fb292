//! Commands sent to the import backend.

use serde::{Deserialize, Serialize};

/// Body of the backend's import-from-file endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportFromFileCommand {
    /// Id the file server assigned to the uploaded file.
    pub file_id: String,
    /// Destination the backend imports the file into, e.g. a DAV collection path.
    pub target: String,
}
