//! In-memory stand-ins for every data-access trait.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::ClientError;
use crate::identity::IdentityProvider;
use crate::net::catalog::{AuthorRepository, BookRepository};
use crate::net::functions::FunctionsApi;
use crate::net::geocode::{Geocoder, Place};
use crate::net::types::{Author, Book, SendEmailRequest, SendEmailResponse, User};
use crate::net::weather::{WeatherApi, WeatherReport};

pub fn down() -> ClientError {
    ClientError::Status { status: 500, message: "backend unavailable".into() }
}

/// Catalog backed by two vectors. `failing` makes every call error.
#[derive(Default)]
pub struct MemoryCatalog {
    pub books: Mutex<Vec<Book>>,
    pub authors: Mutex<Vec<Author>>,
    pub failing: bool,
}

impl MemoryCatalog {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books: Mutex::new(books), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }
}

#[async_trait]
impl BookRepository for MemoryCatalog {
    async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        if self.failing {
            return Err(down());
        }
        Ok(self.books.lock().unwrap().clone())
    }

    async fn add_book(&self, book: &Book) -> Result<Book, ClientError> {
        if self.failing {
            return Err(down());
        }
        let mut books = self.books.lock().unwrap();
        let stored = Book { id: Some(format!("b{}", books.len() + 1)), ..book.clone() };
        books.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl AuthorRepository for MemoryCatalog {
    async fn list_authors(&self) -> Result<Vec<Author>, ClientError> {
        if self.failing {
            return Err(down());
        }
        Ok(self.authors.lock().unwrap().clone())
    }

    async fn add_author(&self, author: &Author) -> Result<Author, ClientError> {
        if self.failing {
            return Err(down());
        }
        let mut authors = self.authors.lock().unwrap();
        let stored = Author { id: Some(format!("a{}", authors.len() + 1)), ..author.clone() };
        authors.push(stored.clone());
        Ok(stored)
    }
}

/// Functions server that counts a fixed number and records sent mail.
#[derive(Default)]
pub struct StubFunctions {
    pub count: Option<u64>,
    pub sent: Mutex<Vec<SendEmailRequest>>,
}

#[async_trait]
impl FunctionsApi for StubFunctions {
    async fn count_books(&self) -> Result<u64, ClientError> {
        self.count.ok_or_else(down)
    }

    async fn send_email(&self, request: &SendEmailRequest) -> Result<SendEmailResponse, ClientError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(request.clone());
        Ok(SendEmailResponse::sent(format!("<stub-{}@bookshelf.test>", sent.len())))
    }
}

/// Weather service that knows one city.
pub struct StubWeather;

pub fn melbourne_report() -> WeatherReport {
    WeatherReport {
        city: "Melbourne".into(),
        country: Some("AU".into()),
        temperature_c: 18.0,
        feels_like_c: 17.0,
        humidity: 60,
        description: "clear sky".into(),
        icon_url: None,
    }
}

#[async_trait]
impl WeatherApi for StubWeather {
    async fn current_by_city(&self, city: &str) -> Result<WeatherReport, ClientError> {
        if city.eq_ignore_ascii_case("melbourne") {
            Ok(melbourne_report())
        } else {
            Err(ClientError::Status { status: 404, message: "city not found".into() })
        }
    }

    async fn current_by_coords(&self, _lat: f64, _lon: f64) -> Result<WeatherReport, ClientError> {
        Ok(melbourne_report())
    }
}

/// Geocoder with a fixed gazetteer.
pub struct StubGeocoder;

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Place>, ClientError> {
        Ok(match query {
            "Sydney" => vec![Place { name: "Sydney, New South Wales, Australia".into(), longitude: 151.2093, latitude: -33.8688 }],
            _ => Vec::new(),
        })
    }
}

/// Identity provider accepting password `secret1` and counting calls.
#[derive(Default)]
pub struct StubIdentity {
    pub calls: AtomicUsize,
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if password != "secret1" {
            return Err(ClientError::Auth("Incorrect email or password.".into()));
        }
        Ok(User { uid: "u1".into(), email: Some(email.to_owned()), display_name: None, id_token: None })
    }

    async fn register(&self, email: &str, _password: &str) -> Result<User, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if email == "taken@example.com" {
            return Err(ClientError::Auth("An account with this email already exists.".into()));
        }
        Ok(User { uid: "u2".into(), email: Some(email.to_owned()), display_name: None, id_token: None })
    }

    async fn sign_out(&self) -> Result<(), ClientError> {
        Ok(())
    }
}
