//! Lazy pagination over the citations endpoint.

use std::pin::Pin;
use std::task::{Context, Poll};

use async_stream::try_stream;
use futures::{Stream, StreamExt};
use tracing::debug;
use url::Url;

use super::CitationClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{CitationPage, PageCursor, PaperId};

type PageStream<'a> = Pin<Box<dyn Stream<Item = ClientResult<CitationPage>> + Send + 'a>>;

/// Finite stream of citation pages.
///
/// Yields pages until one arrives without a continuation cursor. The first
/// error is yielded and ends the stream.
pub struct CitationPages<'a> {
    inner: PageStream<'a>,
}

impl<'a> CitationPages<'a> {
    pub(super) fn new(client: &'a CitationClient, paper_id: &'a PaperId) -> Self {
        Self { inner: Box::pin(walk(client, paper_id)) }
    }

    /// Await the next page; `Ok(None)` once the last page has been yielded.
    pub async fn next_page(&mut self) -> ClientResult<Option<CitationPage>> {
        self.inner.next().await.transpose()
    }
}

impl Stream for CitationPages<'_> {
    type Item = ClientResult<CitationPage>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for CitationPages<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CitationPages").finish_non_exhaustive()
    }
}

fn walk<'a>(
    client: &'a CitationClient,
    paper_id: &'a PaperId,
) -> impl Stream<Item = ClientResult<CitationPage>> + Send + 'a {
    try_stream! {
        let first = client.url(&format!("paper/{paper_id}/citations"), &client.citation_params())?;
        let mut request = first.clone();
        let mut number = 1usize;

        loop {
            let page = fetch_page(client, request).await?;
            debug!(page = number, items = page.data.len(), has_more = page.has_more(), "Received citations page");

            let next = page.next.clone();
            yield page;

            request = match next {
                None => break,
                Some(cursor) => resolve_cursor(&first, &cursor)?,
            };
            number += 1;
        }
    }
}

async fn fetch_page(client: &CitationClient, url: Url) -> ClientResult<CitationPage> {
    debug!(%url, "GET");

    let response = client.client.get(url).timeout(client.citations_timeout).send().await?;
    let response = CitationClient::handle_response(response).await?;
    let text = response.text().await?;

    serde_json::from_str(&text).map_err(ClientError::from)
}

/// Turn a continuation cursor into the next request URL.
///
/// Offsets are appended to the first page's query; URLs are used as given.
fn resolve_cursor(first: &Url, cursor: &PageCursor) -> ClientResult<Url> {
    match cursor {
        PageCursor::Offset(offset) => {
            let mut url = first.clone();
            url.query_pairs_mut().append_pair("offset", &offset.to_string());
            Ok(url)
        }
        PageCursor::Url(next) => Ok(Url::parse(next)?),
    }
}
