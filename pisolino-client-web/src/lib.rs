//! pisolino-client-web: il client web di Pisolino.
//! Client HTTP tipizzato verso l'API remota, gestione della lista storie e
//! della sessione utente, glue di rendering Yew.

pub mod api;
pub mod session;
pub mod stories;
pub mod views;
