use serde::{Deserialize, Serialize};

/// Utente ricevuto nel body di POST /user/.
///
/// Viene costruito dal deserializzatore per ogni richiesta e scartato quando
/// l'handler termina. Non ha identità né persistenza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    /// Assente o `null` nel JSON -> `None`. I campi sconosciuti vengono ignorati.
    #[serde(default)]
    pub username: Option<String>,
}

impl UserModel {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: Some(username.into()) }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
