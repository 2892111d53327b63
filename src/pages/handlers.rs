use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{debug, instrument};

use crate::{
    app_state::AppState,
    articles::{ArticleLookup, category_label, normalize_category},
    content::{DEFAULT_SUMMARY_LENGTH, extract_summary, render_content, schema_excerpt},
    pages::{
        dtos::{ArticleBody, ArticleCard, ArticlePage, CategoryPage, ErrorResponse, HomePage},
        errors::PageError,
    },
    seo::{
        PageMetadata, SiteInfo, Sitemap, article_metadata, article_schema, category_metadata,
        home_metadata, not_found_title,
    },
};

#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Newest published articles", body = HomePage)
    )
)]
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Json<HomePage> {
    let articles = state
        .articles
        .list_published_articles(state.limits.home)
        .await;

    Json(HomePage {
        metadata: home_metadata(&state.site),
        articles: articles.iter().map(ArticleCard::from).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/kategori/{category}",
    tag = "pages",
    params(("category" = String, Path, description = "Category token, e.g. `rumah-tangga`")),
    responses(
        (status = 200, description = "Published articles in the category, possibly none", body = CategoryPage)
    )
)]
#[instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<CategoryPage> {
    let token = normalize_category(&category);
    let listing = state
        .articles
        .list_by_category(&token, state.limits.category)
        .await;
    debug!(token = %listing.token, count = listing.articles.len(), "Category listing");

    Json(CategoryPage {
        metadata: category_metadata(&state.site, &listing.name, &listing.token),
        articles: listing.articles.iter().map(ArticleCard::from).collect(),
        name: listing.name,
        token: listing.token,
    })
}

#[utoipa::path(
    get,
    path = "/artikel/{identifier}",
    tag = "pages",
    params(("identifier" = String, Path, description = "Article slug or document id")),
    responses(
        (status = 200, description = "Article page model", body = ArticlePage),
        (status = 404, description = "No published article with this identifier", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn article(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<ArticlePage>, PageError> {
    let lookup = ArticleLookup::new(&state.articles);

    let metadata = article_page_metadata(&state.site, &lookup, &identifier).await?;
    let page = article_page_body(&state.site, &lookup, &identifier, metadata).await?;

    Ok(Json(page))
}

/// Head of the article document: titles, description, social cards.
async fn article_page_metadata(
    site: &SiteInfo,
    lookup: &ArticleLookup<'_>,
    identifier: &str,
) -> Result<PageMetadata, PageError> {
    let article = lookup
        .find(identifier)
        .await
        .ok_or_else(|| not_found(site))?;
    let description = extract_summary(&article.content, &article.title, DEFAULT_SUMMARY_LENGTH);

    Ok(article_metadata(site, &article, &description))
}

/// Body of the article document: rendered markup and structured data.
async fn article_page_body(
    site: &SiteInfo,
    lookup: &ArticleLookup<'_>,
    identifier: &str,
    metadata: PageMetadata,
) -> Result<ArticlePage, PageError> {
    let article = lookup
        .find(identifier)
        .await
        .ok_or_else(|| not_found(site))?;
    let html = render_content(&article.content);

    Ok(ArticlePage {
        metadata,
        json_ld: article_schema(site, &article, &schema_excerpt(&article.content)),
        article: ArticleBody {
            title: article.title.clone(),
            category: category_label(&article.category).to_string(),
            category_token: normalize_category(&article.category),
            banner_url: article.banner_url.clone(),
            published_time: article.published_time(),
            html,
            id: article.id,
        },
    })
}

fn not_found(site: &SiteInfo) -> PageError {
    PageError::NotFound {
        title: not_found_title(site),
    }
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = "pages",
    responses(
        (status = 200, description = "Sitemap of the home page and published articles", content_type = "application/xml", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let articles = state
        .articles
        .list_published_articles(state.limits.sitemap)
        .await;
    let xml = Sitemap::build(&state.site, &articles, Utc::now()).into_xml();

    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}
