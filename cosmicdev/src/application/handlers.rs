use std::path::PathBuf;

use cosmic_core::codec::LAST_READ_KEY;
use cosmic_core::dashboard::Dashboard;
use cosmic_core::error::{CosmicError, Result};
use cosmic_core::exams::ExamSchedule;
use cosmic_core::i18n::{Language, translate};
use cosmic_core::repo::ContentRepo;
use cosmic_core::repo_factory::{ContentBackend, open_content};
use cosmic_core::session::{Key, KeyEvent, LastReadStore, ReadingSession};
use cosmic_core::validate::{validate_segment, validate_segments};
use cosmic_core::store::{Backend, KvStore, open_store};
use cosmic_core::{Document, JournalStore, SessionPolicy};

fn content_from_root(root: PathBuf) -> Box<dyn ContentRepo> {
    open_content(ContentBackend::Fs(root))
}

fn state_store(state: PathBuf) -> Result<Box<dyn KvStore>> {
    open_store(Backend::Journal(state))
}

fn open_session<'a>(
    store: &'a dyn KvStore,
    subject: &str,
    file: &str,
    total: Option<u32>,
) -> Result<ReadingSession<&'a dyn KvStore>> {
    let (subject, file) = validate_segments(Some(subject), Some(file))?;
    let last_read = LastReadStore::load(store);
    let mut session = ReadingSession::open(
        store,
        last_read,
        SessionPolicy::default(),
        Document::new(subject, file),
    );
    if let Some(total) = total {
        session.on_document_loaded(total);
    }
    Ok(session)
}

fn describe(session: &ReadingSession<&dyn KvStore>) -> String {
    let total = session
        .total_pages()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "--".to_string());
    let marks: Vec<String> = session.bookmarks().iter().map(|p| p.to_string()).collect();
    format!(
        "{}  page {}/{}  zoom {}%  bookmarked={}  zen={}  bookmarks=[{}]",
        session.document().name,
        session.current_page(),
        total,
        session.zoom_percent(),
        session.is_bookmarked(),
        session.is_zen(),
        marks.join(",")
    )
}

pub fn handle_subjects(root: PathBuf) -> Result<()> {
    let repo = content_from_root(root);
    for s in repo.list_subjects()? {
        println!("{:>4}  {}", s.pdf_count, s.name);
    }
    Ok(())
}

pub fn handle_docs(root: PathBuf, subject: String) -> Result<()> {
    let subject = validate_segment(&subject)?;
    let repo = content_from_root(root);
    let docs = repo.list_documents(subject)?;
    if docs.is_empty() {
        eprintln!("docs: no PDF files found in {subject}");
    }
    for name in docs {
        println!("{}  {}", name, Document::new(subject, name.as_str()).pdf_url());
    }
    Ok(())
}

pub fn handle_search(root: PathBuf, state: PathBuf, query: String) -> Result<()> {
    let repo = content_from_root(root);
    let store = state_store(state)?;
    let dashboard = Dashboard::mount(repo.list_subjects()?, &LastReadStore::load(store.as_ref()));
    for s in dashboard.filter(&query) {
        println!("{:>4}  {}", s.pdf_count, s.name);
    }
    Ok(())
}

pub fn handle_open(
    state: PathBuf,
    subject: String,
    file: String,
    total: Option<u32>,
) -> Result<()> {
    let store = state_store(state)?;
    let session = open_session(store.as_ref(), &subject, &file, total)?;
    println!("{}", describe(&session));
    Ok(())
}

pub fn handle_goto(
    state: PathBuf,
    subject: String,
    file: String,
    page: i64,
    total: Option<u32>,
) -> Result<()> {
    let store = state_store(state)?;
    let mut session = open_session(store.as_ref(), &subject, &file, total)?;
    if session.go_to_page(page) {
        eprintln!("goto: {} -> page {}", file, session.current_page());
    } else {
        eprintln!("goto: {} already on page {}", file, session.current_page());
    }
    println!("{}", describe(&session));
    Ok(())
}

pub fn handle_bookmark(
    state: PathBuf,
    subject: String,
    file: String,
    page: Option<i64>,
    total: Option<u32>,
) -> Result<()> {
    let store = state_store(state)?;
    let mut session = open_session(store.as_ref(), &subject, &file, total)?;
    if let Some(p) = page {
        session.go_to_page(p);
    }
    let on = session.toggle_bookmark();
    eprintln!(
        "bookmark: page {} {}",
        session.current_page(),
        if on { "added" } else { "removed" }
    );
    println!("{}", describe(&session));
    Ok(())
}

pub fn handle_keys(
    state: PathBuf,
    subject: String,
    file: String,
    total: Option<u32>,
    zen: bool,
    keys: Vec<String>,
) -> Result<()> {
    let parsed = keys
        .iter()
        .map(|k| k.parse::<Key>())
        .collect::<Result<Vec<_>>>()?;
    let store = state_store(state)?;
    let mut session = open_session(store.as_ref(), &subject, &file, total)?;
    if zen {
        session.toggle_zen_mode();
    }
    for key in parsed {
        match session.handle_key(KeyEvent::reader(key)) {
            Some(action) => eprintln!("key: {key} -> {action:?}"),
            None => eprintln!("key: {key} ignored"),
        }
    }
    println!("{}", describe(&session));
    Ok(())
}

pub fn handle_continue(state: PathBuf) -> Result<()> {
    let store = state_store(state)?;
    let lang = Language::load(store.as_ref());
    let dashboard = Dashboard::mount(Vec::new(), &LastReadStore::load(store.as_ref()));
    match dashboard.continue_reading() {
        Some(c) => println!(
            "{}: {} ({} • {} {})  {}",
            translate("dashboard.continueReading", lang),
            c.title,
            c.subject,
            translate("viewer.page", lang),
            c.page,
            c.href
        ),
        None => eprintln!("continue: nothing read yet"),
    }
    Ok(())
}

pub fn handle_exams(select: Option<String>, now: Option<i64>) -> Result<()> {
    let now = match now {
        Some(secs) => time::OffsetDateTime::from_unix_timestamp(secs)
            .map_err(|e| CosmicError::Format(format!("--now: {e}")))?,
        None => time::OffsetDateTime::now_utc(),
    };
    let schedule = ExamSchedule::default();
    let selected = schedule
        .auto_select(select.as_deref(), now)
        .or_else(|| schedule.displayed(select.as_deref()));
    for exam in schedule.exams() {
        let marker = if selected.is_some_and(|s| s.subject == exam.subject) {
            '*'
        } else {
            ' '
        };
        let status = if exam.is_past(now) { "done" } else { "upcoming" };
        println!("{marker} {}  {:<28} {status}", exam.date.date(), exam.subject);
    }
    match selected.filter(|e| !e.is_past(now)) {
        Some(exam) => {
            let left = exam.time_left(now);
            println!(
                "next: {}  {}d {:02}h {:02}m {:02}s",
                exam.subject, left.days, left.hours, left.minutes, left.seconds
            );
        }
        None => eprintln!("exams: no upcoming exams"),
    }
    Ok(())
}

pub fn handle_lang(state: PathBuf, code: Option<String>) -> Result<()> {
    let store = state_store(state)?;
    let lang = match code {
        Some(code) => {
            let lang: Language = code.parse()?;
            lang.save(store.as_ref())?;
            eprintln!("lang: set to {lang}");
            lang
        }
        None => Language::load(store.as_ref()),
    };
    println!("{} ({})", lang, lang.dir());
    Ok(())
}

pub fn handle_state(state: PathBuf) -> Result<()> {
    let store = JournalStore::open(&state)?;
    for (key, value) in store.entries() {
        let marker = if key == LAST_READ_KEY { "*" } else { " " };
        println!("{marker} {key} = {value}");
    }
    Ok(())
}
