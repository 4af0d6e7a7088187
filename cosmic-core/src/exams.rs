use time::OffsetDateTime;
use time::macros::datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exam {
    pub subject: String,
    pub date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Exam {
    pub fn new(subject: impl Into<String>, date: OffsetDateTime) -> Self {
        Self {
            subject: subject.into(),
            date,
        }
    }

    pub fn is_past(&self, now: OffsetDateTime) -> bool {
        self.date <= now
    }

    /// Zero once the exam has started.
    pub fn time_left(&self, now: OffsetDateTime) -> TimeLeft {
        let remaining = self.date - now;
        if !remaining.is_positive() {
            return TimeLeft::default();
        }
        let secs = remaining.whole_seconds();
        TimeLeft {
            days: secs / 86_400,
            hours: secs / 3_600 % 24,
            minutes: secs / 60 % 60,
            seconds: secs % 60,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExamSchedule {
    exams: Vec<Exam>,
}

impl Default for ExamSchedule {
    fn default() -> Self {
        Self::new(vec![
            Exam::new("Information Security", datetime!(2026-01-04 09:00 UTC)),
            Exam::new("Digital Signal Processing", datetime!(2026-01-07 09:00 UTC)),
            Exam::new("Computer Network", datetime!(2026-01-11 09:00 UTC)),
            Exam::new("Python", datetime!(2026-01-13 09:00 UTC)),
            Exam::new("Software Eng", datetime!(2026-01-17 09:00 UTC)),
            Exam::new("Digital Forensics", datetime!(2026-01-19 09:00 UTC)),
        ])
    }
}

impl ExamSchedule {
    pub fn new(exams: Vec<Exam>) -> Self {
        Self { exams }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn find(&self, subject: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.subject == subject)
    }

    /// Exams still in the future, in schedule order.
    pub fn upcoming(&self, now: OffsetDateTime) -> impl Iterator<Item = &Exam> {
        self.exams.iter().filter(move |e| !e.is_past(now))
    }

    /// Keeps a selection that is still upcoming; a finished one moves to the
    /// first upcoming exam, or stays when nothing is upcoming. A subject not
    /// in the schedule resolves to nothing and is left to [`Self::displayed`].
    pub fn auto_select<'a>(
        &'a self,
        selected: Option<&str>,
        now: OffsetDateTime,
    ) -> Option<&'a Exam> {
        match selected {
            Some(s) => match self.find(s) {
                Some(exam) if !exam.is_past(now) => Some(exam),
                Some(exam) => self.upcoming(now).next().or(Some(exam)),
                None => None,
            },
            None => self.upcoming(now).next(),
        }
    }

    /// The exam a countdown should show: the selection, else the first entry.
    pub fn displayed<'a>(&'a self, selected: Option<&str>) -> Option<&'a Exam> {
        selected
            .and_then(|s| self.find(s))
            .or_else(|| self.exams.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_left_breakdown() {
        let exam = Exam::new("Python", datetime!(2026-01-13 09:00 UTC));
        let now = datetime!(2026-01-11 06:58:30 UTC);
        assert_eq!(
            exam.time_left(now),
            TimeLeft {
                days: 2,
                hours: 2,
                minutes: 1,
                seconds: 30
            }
        );
        assert_eq!(exam.time_left(datetime!(2026-01-14 00:00 UTC)), TimeLeft::default());
    }

    #[test]
    fn auto_select_moves_past_finished_exams() {
        let sched = ExamSchedule::default();
        let now = datetime!(2026-01-08 12:00 UTC);
        assert_eq!(sched.auto_select(None, now).unwrap().subject, "Computer Network");
        assert_eq!(
            sched.auto_select(Some("Information Security"), now).unwrap().subject,
            "Computer Network"
        );
        assert_eq!(sched.auto_select(Some("Software Eng"), now).unwrap().subject, "Software Eng");
    }

    #[test]
    fn nothing_upcoming_keeps_selection() {
        let sched = ExamSchedule::default();
        let now = datetime!(2026-02-01 00:00 UTC);
        assert_eq!(sched.upcoming(now).count(), 0);
        assert!(sched.auto_select(None, now).is_none());
        assert_eq!(sched.auto_select(Some("Python"), now).unwrap().subject, "Python");
        assert_eq!(sched.displayed(None).unwrap().subject, "Information Security");
    }

    #[test]
    fn unknown_selection_falls_back_to_first_entry() {
        let sched = ExamSchedule::default();
        let now = datetime!(2026-01-08 12:00 UTC);
        assert!(sched.auto_select(Some("Astronomy"), now).is_none());
        assert_eq!(sched.displayed(Some("Astronomy")).unwrap().subject, "Information Security");
    }
}
