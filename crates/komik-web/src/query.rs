use std::future::Future;

use komik_lib::{
    error::Error,
    models::{Comment, NewComment},
    payload::decode_comments,
    traits::DetailSource,
};

use crate::utils::api_host;

fn manga_url(slug: &str) -> String {
    let slug: String = js_sys::encode_uri_component(slug).into();
    format!("{}/manga/{}", api_host(), slug)
}

fn comments_url(slug: &str) -> String {
    format!("{}/comments", manga_url(slug))
}

fn request_error(e: reqwest::Error) -> Error {
    match e.status() {
        Some(status) => Error::Status(status.as_u16()),
        None => Error::Network(e.to_string()),
    }
}

/// GETs `url` and returns the body of a 2xx response
async fn get_text(url: String) -> Result<String, Error> {
    let client = reqwest::Client::new();

    let res = client.get(url).send().await.map_err(request_error)?;
    let res = res.error_for_status().map_err(request_error)?;
    res.text().await.map_err(request_error)
}

/// Detail records from the REST api
#[derive(Clone, Copy, Default)]
pub struct HttpDetailSource;

impl DetailSource for HttpDetailSource {
    fn fetch_detail(&self, slug: String) -> impl Future<Output = Result<String, Error>> {
        get_text(manga_url(&slug))
    }
}

pub async fn fetch_comments(slug: &str) -> Result<Vec<Comment>, Error> {
    let body = get_text(comments_url(slug)).await?;
    decode_comments(&body)
}

pub async fn post_comment(slug: &str, comment: &NewComment) -> Result<(), Error> {
    let client = reqwest::Client::new();

    client
        .post(comments_url(slug))
        .json(comment)
        .send()
        .await
        .map_err(request_error)?
        .error_for_status()
        .map_err(request_error)?;

    Ok(())
}
