use super::crud::{
    AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions, SearchBox,
};
use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Pager, SelectField, TextArea, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    content::format_date,
    forms::slugify,
    resources::blog::{parse_tags, BlogPost, BlogPostDraft, PostStatus},
    PageRequest,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct PostForm {
    slug: RwSignal<String>,
    title: RwSignal<String>,
    excerpt: RwSignal<String>,
    content: RwSignal<String>,
    category_id: RwSignal<String>,
    tags: RwSignal<String>,
    status: RwSignal<String>,
}

impl PostForm {
    fn new() -> Self {
        Self {
            slug: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            excerpt: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
            status: RwSignal::new(PostStatus::Draft.as_str().to_string()),
        }
    }

    fn fill(&self, draft: BlogPostDraft) {
        self.slug.set(draft.slug);
        self.title.set(draft.title);
        self.excerpt.set(draft.excerpt);
        self.content.set(draft.content);
        self.category_id.set(draft.category_id.unwrap_or_default());
        self.tags.set(draft.tags.join(", "));
        self.status.set(draft.status.as_str().to_string());
    }

    fn draft(&self) -> BlogPostDraft {
        let title = self.title.get_untracked().trim().to_string();
        let slug = self.slug.get_untracked().trim().to_string();
        let category = self.category_id.get_untracked();
        BlogPostDraft {
            slug: if slug.is_empty() { slugify(&title) } else { slug },
            title,
            excerpt: self.excerpt.get_untracked().trim().to_string(),
            content: self.content.get_untracked(),
            category_id: Some(category).filter(|c| !c.is_empty()),
            tags: parse_tags(&self.tags.get_untracked()),
            status: PostStatus::parse(&self.status.get_untracked()).unwrap_or_default(),
        }
    }
}

const HEADERS: &[&str] = &["Title", "Status", "Author", "Published"];

#[component]
pub fn AdminBlogPage() -> impl IntoView {
    let state = CrudState::new();
    let form = PostForm::new();
    let posts = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.blog_posts().list(&request).await }
    });
    let categories = LocalResource::new(|| async {
        client()?
            .blog_categories()
            .list(&PageRequest::new(1, 100))
            .await
    });

    let on_submit = Callback::new(move |()| {
        let draft = form.draft();
        if !state.form.check(&draft) {
            return;
        }
        let id = state.editing_id();
        state.submit(async move {
            let api = client()?;
            match id {
                Some(id) => api.blog_posts().update(&id, &draft).await.map(|_| ()),
                None => api.blog_posts().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |post: BlogPost| {
        let id = post.id.clone();
        let draft = BlogPostDraft::from(&post);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = post.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.blog_posts().delete(&id).await });
        });
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{post.title}</td>
                <td class=Theme::TD><span class=Theme::BADGE>{post.status.as_str()}</span></td>
                <td class=Theme::TD>{post.author.unwrap_or_else(|| "-".to_string())}</td>
                <td class=Theme::TD>{post.published_at.as_deref().map(format_date).unwrap_or_default()}</td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    let status_options = PostStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), status.as_str().to_string()))
        .collect::<Vec<_>>();

    view! {
        <PageHeader title="Blog posts">
            <NewButton
                state=state
                label="New post"
                on_open=Callback::new(move |()| form.fill(BlogPostDraft::default()))
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="post" on_submit=on_submit>
            <TextField label="Title" name="title" value=form.title errors=state.form.errors />
            <TextField
                label="Slug"
                name="slug"
                value=form.slug
                errors=state.form.errors
                placeholder="derived from the title when empty"
            />
            <TextArea label="Excerpt" name="excerpt" value=form.excerpt errors=state.form.errors rows=2 />
            <TextArea label="Content" name="content" value=form.content errors=state.form.errors rows=14 />
            {move || {
                let mut options = vec![(String::new(), "Uncategorized".to_string())];
                if let Some(Ok(page)) = categories.get() {
                    options.extend(page.items.into_iter().map(|c| (c.id, c.name)));
                }
                view! {
                    <SelectField
                        label="Category"
                        name="category_id"
                        value=form.category_id
                        options=options
                        errors=state.form.errors
                    />
                }
            }}
            <TextField
                label="Tags (comma separated)"
                name="tags"
                value=form.tags
                errors=state.form.errors
            />
            <SelectField
                label="Status"
                name="status"
                value=form.status
                options=status_options.clone()
                errors=state.form.errors
            />
        </EditorPanel>
        <SearchBox state=state />
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match posts.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No posts yet." /> }.into_any()
                    }
                    Some(Ok(list)) => list.items.into_iter().map(row).collect_view().into_any(),
                    Some(Err(err)) => {
                        view! {
                            <tr><td colspan="5" class="px-6 py-4"><LoadError error=err /></td></tr>
                        }
                            .into_any()
                    }
                    None => view! { <MessageRow columns=HEADERS.len() /> }.into_any(),
                }}
            </Suspense>
        </AdminTable>
        {move || {
            posts
                .get()
                .and_then(Result::ok)
                .map(|list| {
                    view! {
                        <Pager
                            page=list.page
                            total_pages=list.total_pages()
                            label=list.range_label()
                            on_change=state.page_callback()
                        />
                    }
                })
        }}
    }
}
