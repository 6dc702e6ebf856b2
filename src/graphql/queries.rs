//! GraphQL query documents for the upstream WPGraphQL schema

/// One page of posts with the list projection, newest first
pub const POSTS_PAGE: &str = r"
query PostsPage($first: Int!, $after: String) {
  posts(first: $first, after: $after, where: { orderby: { field: DATE, order: DESC } }) {
    pageInfo {
      endCursor
      hasNextPage
    }
    nodes {
      id
      slug
      title
      date
      excerpt
      featuredImage {
        node {
          sourceUrl
          altText
        }
      }
      categories {
        nodes {
          name
        }
      }
      author {
        node {
          name
          avatar {
            url
          }
        }
      }
    }
  }
}
";

/// One page of the slug-only projection
pub const SLUG_PAGE: &str = r"
query PostSlugs($first: Int!, $after: String) {
  posts(first: $first, after: $after) {
    pageInfo {
      endCursor
      hasNextPage
    }
    nodes {
      slug
    }
  }
}
";

/// Cursor-free point lookup of one post by slug, full detail
pub const POST_BY_SLUG: &str = r"
query PostBySlug($slug: ID!) {
  post(id: $slug, idType: SLUG) {
    id
    slug
    title
    date
    excerpt
    content
    featuredImage {
      node {
        sourceUrl
        altText
      }
    }
    categories {
      nodes {
        name
      }
    }
    author {
      node {
        name
        avatar {
          url
        }
      }
    }
  }
}
";
