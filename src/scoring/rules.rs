//! Domain-specific bonus rule bank
//!
//! One declarative record per target document: a predicate over the
//! lower-cased query plus a bonus added when it fires. Rules are evaluated
//! uniformly by the scorer; adding or removing a rule never touches control
//! flow. Most rules award +15; a narrower high-confidence rule awards +20.

/// One alternative within a rule predicate
#[derive(Debug, Clone, Copy)]
pub enum Clause {
    /// Satisfied when any phrase appears as a substring of the query
    Any(&'static [&'static str]),
    /// Satisfied when every group contributes at least one matching phrase
    All(&'static [&'static [&'static str]]),
}

impl Clause {
    /// Evaluate against a lower-cased query
    pub fn matches(&self, lower_query: &str) -> bool {
        match self {
            Clause::Any(phrases) => phrases.iter().any(|p| lower_query.contains(p)),
            Clause::All(groups) => groups
                .iter()
                .all(|group| group.iter().any(|p| lower_query.contains(p))),
        }
    }
}

/// A per-document bonus rule
#[derive(Debug, Clone, Copy)]
pub struct DomainRule {
    /// Document key the bonus applies to
    pub target_key: &'static str,
    /// Score added when the predicate fires
    pub bonus: u32,
    /// Disjunction of clauses; any satisfied clause fires the rule
    pub clauses: &'static [Clause],
}

impl DomainRule {
    /// Evaluate the predicate against a lower-cased query
    pub fn matches(&self, lower_query: &str) -> bool {
        self.clauses.iter().any(|c| c.matches(lower_query))
    }
}

/// The full rule bank, one or more rules per document
pub const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        target_key: "fees",
        bonus: 15,
        clauses: &[
            Clause::Any(&["fee", "fees", "tuition", "cost", "costs", "payment", "payments", "money", "price", "pricing", "charge", "charges", "expensive", "cheap", "afford", "financial", "billing", "invoice", "owe", "debt", "pay", "paid", "unpaid", "installment", "installments"]),
            Clause::All(&[&["how"], &["much"]]),
            Clause::All(&[&["what"], &["cost", "price"]]),
            Clause::All(&[&["registration"], &["fee"]]),
            Clause::All(&[&["semester"], &["fee", "cost"]]),
            Clause::All(&[&["annual"], &["fee", "cost"]]),
            Clause::All(&[&["yearly"], &["fee", "cost"]]),
            Clause::All(&[&["can"], &["pay"]]),
            Clause::All(&[&["need"], &["pay"]]),
            Clause::All(&[&["have"], &["pay"]]),
            Clause::All(&[&["schedule"], &["payment"]]),
        ],
    },
    DomainRule {
        target_key: "semesters",
        bonus: 15,
        clauses: &[
            Clause::Any(&["semester", "semesters", "term", "terms", "autumn", "fall", "spring", "october", "february", "march", "june", "calendar", "holiday", "vacation"]),
            Clause::All(&[&["academic"], &["year"]]),
            Clause::All(&[&["when"], &["start", "begin", "commence"]]),
            Clause::All(&[&["what"], &["time"], &["start", "begin"]]),
            Clause::All(&[&["schedule"], &["academic", "year", "semester"]]),
            Clause::All(&[&["15"], &["weeks"]]),
            Clause::All(&[&["12"], &["weeks"]]),
            Clause::All(&[&["3"], &["weeks"]]),
            Clause::All(&[&["break"], &["semester"]]),
            Clause::All(&[&["how"], &["long"], &["semester", "term"]]),
            Clause::All(&[&["how"], &["many"], &["weeks"]]),
            Clause::All(&[&["duration"], &["semester", "term"]]),
        ],
    },
    DomainRule {
        target_key: "attendance",
        bonus: 15,
        clauses: &[
            Clause::Any(&["attendance", "attend", "attending", "absence", "absences", "absent", "miss", "missing", "missed", "skip", "skipping", "skipped", "compulsory", "mandatory", "25%"]),
            Clause::All(&[&["class"], &["miss", "absent", "skip"]]),
            Clause::All(&[&["lecture"], &["miss", "absent", "skip"]]),
            Clause::All(&[&["required"], &["class", "lecture"]]),
            Clause::All(&[&["contact"], &["hours"]]),
            Clause::All(&[&["how"], &["many"], &["miss", "absent", "skip"]]),
            Clause::All(&[&["can"], &["miss"]]),
            Clause::All(&[&["allowed"], &["miss", "absent"]]),
            Clause::All(&[&["sick"], &["class", "lecture"]]),
            Clause::All(&[&["illness"], &["class", "lecture"]]),
            Clause::All(&[&["medical"], &["absence", "miss"]]),
            Clause::All(&[&["excuse"], &["absence", "miss"]]),
            Clause::All(&[&["penalty"], &["absence"]]),
            Clause::All(&[&["consequence"], &["absence"]]),
        ],
    },
    DomainRule {
        target_key: "leave_of_absence",
        bonus: 15,
        clauses: &[
            Clause::Any(&["leave", "suspend", "suspension", "defer", "deferral", "sabbatical", "hiatus", "retrospective"]),
            Clause::All(&[&["absence"], &["leave"]]),
            Clause::All(&[&["break"], &["study", "studies", "academic"]]),
            Clause::All(&[&["gap"], &["year"]]),
            Clause::All(&[&["pause"], &["study", "studies"]]),
            Clause::All(&[&["interrupt"], &["study", "studies"]]),
            Clause::All(&[&["postpone"], &["study", "studies"]]),
            Clause::All(&[&["temporary"], &["stop", "break"]]),
            Clause::All(&[&["personal"], &["reasons"]]),
            Clause::All(&[&["medical"], &["reasons"]]),
            Clause::All(&[&["family"], &["emergency"]]),
            Clause::All(&[&["documented"], &["reasons"]]),
            Clause::All(&[&["take"], &["time"], &["off"]]),
            Clause::All(&[&["step"], &["back"]]),
            Clause::All(&[&["need"], &["break"]]),
            Clause::All(&[&["can"], &["pause"]]),
            Clause::All(&[&["how"], &["take"], &["break"]]),
            Clause::All(&[&["advance"], &["request"]]),
        ],
    },
    DomainRule {
        target_key: "calculator_policy",
        bonus: 15,
        clauses: &[
            Clause::Any(&["calculator", "calculators", "computation"]),
            Clause::All(&[&["math"], &["tool", "device"]]),
            Clause::All(&[&["computing"], &["device"]]),
            Clause::All(&[&["electronic"], &["device", "tool"]]),
            Clause::All(&[&["scientific"], &["calculator"]]),
            Clause::All(&[&["graphing"], &["calculator"]]),
            Clause::All(&[&["can"], &["use"], &["calculator", "math"]]),
            Clause::All(&[&["allowed"], &["calculator"]]),
            Clause::All(&[&["permitted"], &["calculator"]]),
            Clause::All(&[&["prohibited"], &["calculator"]]),
            Clause::All(&[&["approved"], &["calculator"]]),
            Clause::All(&[&["exam"], &["calculator"]]),
            Clause::All(&[&["test"], &["calculator"]]),
            Clause::All(&[&["assessment"], &["calculator"]]),
            Clause::All(&[&["week"], &["10"], &["approval"]]),
            Clause::All(&[&["marker"], &["calculator"]]),
            Clause::All(&[&["distinctive"], &["marker"]]),
            Clause::All(&[&["alphabetic"], &["display"]]),
            Clause::All(&[&["external"], &["programming"]]),
            Clause::All(&[&["numeric"], &["functions"]]),
            Clause::All(&[&["unfair"], &["means"], &["calculator"]]),
        ],
    },
    DomainRule {
        target_key: "examination_procedures",
        bonus: 15,
        clauses: &[
            Clause::Any(&["exam", "exams", "examination", "examinations", "test", "tests", "testing", "assessment", "assessments", "midterm", "resit", "retake", "invigilator"]),
            Clause::All(&[&["final"], &["exam", "test", "assessment"]]),
            Clause::All(&[&["closed"], &["exam"]]),
            Clause::All(&[&["written"], &["exam"]]),
            Clause::All(&[&["makeup"], &["exam"]]),
            Clause::All(&[&["late"], &["exam", "test"]]),
            Clause::All(&[&["30"], &["minutes"], &["late"]]),
            Clause::All(&[&["40"], &["minutes"], &["leave"]]),
            Clause::All(&[&["10"], &["minutes"], &["final"]]),
            Clause::All(&[&["transparent"], &["bag"]]),
            Clause::All(&[&["mobile"], &["phone"], &["exam"]]),
            Clause::All(&[&["student"], &["card"], &["exam"]]),
            Clause::All(&[&["registration"], &["number"]]),
            Clause::All(&[&["seating"], &["arrangement"]]),
            Clause::All(&[&["notice"], &["board"]]),
            Clause::All(&[&["miss"], &["exam"]]),
            Clause::All(&[&["absent"], &["exam"]]),
            Clause::All(&[&["special"], &["paper"]]),
            Clause::All(&[&["when"], &["exam"]]),
            Clause::All(&[&["what"], &["time"], &["exam"]]),
            Clause::All(&[&["where"], &["exam"]]),
            Clause::All(&[&["how"], &["long"], &["exam"]]),
            Clause::All(&[&["exam"], &["rules"]]),
            Clause::All(&[&["exam"], &["procedure"]]),
            Clause::All(&[&["exam"], &["policy"]]),
        ],
    },
    DomainRule {
        target_key: "unfair_means",
        bonus: 15,
        clauses: &[
            Clause::Any(&["plagiarism", "plagiarize", "plagiarized", "plagiarizing", "cheat", "cheating", "cheated", "collusion", "copying", "resubmit", "resubmission", "fabrication", "ai-generated", "cite", "citation", "turnitin"]),
            Clause::All(&[&["academic"], &["dishonesty"]]),
            Clause::All(&[&["academic"], &["misconduct"]]),
            Clause::All(&[&["unfair"], &["means"]]),
            Clause::All(&[&["collaborate"], &["individual"]]),
            Clause::All(&[&["copy"], &["work", "assignment"]]),
            Clause::All(&[&["stolen"], &["work"]]),
            Clause::All(&[&["bought"], &["work"]]),
            Clause::All(&[&["commissioned"], &["work"]]),
            Clause::All(&[&["double"], &["submission"]]),
            Clause::All(&[&["false"], &["data"]]),
            Clause::All(&[&["artificial"], &["intelligence"]]),
            Clause::All(&[&["reference"], &["properly", "correctly"]]),
            Clause::All(&[&["acknowledge"], &["source"]]),
            Clause::All(&[&["plagiarism"], &["detection"]]),
            Clause::All(&[&["similarity"], &["report"]]),
            Clause::All(&[&["declaration"], &["plagiarism"]]),
            Clause::All(&[&["type"], &["a"], &["misuse"]]),
            Clause::All(&[&["type"], &["b"], &["misuse"]]),
            Clause::All(&[&["type"], &["c"], &["unfair"]]),
            Clause::All(&[&["minor"], &["misuse"]]),
            Clause::All(&[&["extensive"], &["misuse"]]),
            Clause::All(&[&["deliberate"], &["misuse"]]),
            Clause::All(&[&["what"], &["plagiarism"]]),
            Clause::All(&[&["how"], &["avoid"], &["plagiarism"]]),
            Clause::All(&[&["caught"], &["plagiarism"]]),
            Clause::All(&[&["accused"], &["plagiarism"]]),
        ],
    },
    DomainRule {
        target_key: "library_regulations",
        bonus: 15,
        clauses: &[
            Clause::Any(&["library", "libraries", "food", "drink", "drinks", "eating", "drinking", "snack", "snacks", "meal", "meals", "beverage", "beverages", "water", "coffee", "tea", "juice", "soda", "noise", "quiet", "silent", "borrow", "borrowing", "return", "returning", "renew", "renewal", "fine", "fines"]),
            Clause::All(&[&["can"], &["eat", "drink"]]),
            Clause::All(&[&["allowed"], &["eat", "drink", "food"]]),
            Clause::All(&[&["permitted"], &["eat", "drink", "food"]]),
            Clause::All(&[&["mobile"], &["phone"], &["library"]]),
            Clause::All(&[&["due"], &["date"]]),
            Clause::All(&[&["late"], &["return"]]),
            Clause::All(&[&["reference"], &["material"]]),
            Clause::All(&[&["remove"], &["material"]]),
            Clause::All(&[&["check"], &["out"]]),
            Clause::All(&[&["student"], &["card"], &["library"]]),
            Clause::All(&[&["unattended"], &["belongings"]]),
            Clause::All(&[&["security"], &["library"]]),
            Clause::All(&[&["gaming"], &["library"]]),
            Clause::All(&[&["entertainment"], &["library"]]),
            Clause::All(&[&["academic"], &["purposes"], &["library"]]),
            Clause::All(&[&["sealable"], &["bottle"]]),
            Clause::All(&[&["library"], &["rules"]]),
            Clause::All(&[&["library"], &["regulation"]]),
        ],
    },
    DomainRule {
        target_key: "study_periods",
        bonus: 15,
        clauses: &[
            Clause::Any(&["full-time", "part-time", "practicum", "allowance"]),
            Clause::All(&[&["study"], &["period", "duration", "length", "time"]]),
            Clause::All(&[&["program"], &["length", "duration", "time"]]),
            Clause::All(&[&["degree"], &["length", "duration", "time"]]),
            Clause::All(&[&["ba"], &["length", "duration", "time"]]),
            Clause::All(&[&["bsc"], &["length", "duration", "time"]]),
            Clause::All(&[&["ma"], &["length", "duration", "time"]]),
            Clause::All(&[&["msc"], &["length", "duration", "time"]]),
            Clause::All(&[&["mba"], &["length", "duration", "time"]]),
            Clause::All(&[&["bachelor"], &["length", "duration", "time"]]),
            Clause::All(&[&["master"], &["length", "duration", "time"]]),
            Clause::All(&[&["undergraduate"], &["length", "duration", "time"]]),
            Clause::All(&[&["postgraduate"], &["length", "duration", "time"]]),
            Clause::All(&[&["3"], &["years"]]),
            Clause::All(&[&["4"], &["years"]]),
            Clause::All(&[&["1"], &["year"]]),
            Clause::All(&[&["2"], &["years"]]),
            Clause::All(&[&["27"], &["months"]]),
            Clause::All(&[&["maximum"], &["period"]]),
            Clause::All(&[&["normal"], &["period"]]),
            Clause::All(&[&["how"], &["long"], &["degree", "program", "course", "study"]]),
            Clause::All(&[&["what"], &["duration"]]),
            Clause::All(&[&["extension"], &["submission"]]),
        ],
    },
    DomainRule {
        target_key: "re_admission",
        bonus: 15,
        clauses: &[
            Clause::Any(&["readmit", "re-admit", "readmission", "re-admission", "readmitted", "re-admitted", "reapply", "re-apply"]),
            Clause::All(&[&["come"], &["back"]]),
            Clause::All(&[&["return"], &["college", "university", "study", "studies"]]),
            Clause::All(&[&["previously"], &["excluded"]]),
            Clause::All(&[&["failed"], &["program"]]),
            Clause::All(&[&["withdrew"], &["program"]]),
            Clause::All(&[&["withdrawn"], &["program"]]),
            Clause::All(&[&["dropped"], &["out"]]),
            Clause::All(&[&["left"], &["college", "university"]]),
            Clause::All(&[&["second"], &["chance"]]),
            Clause::All(&[&["another"], &["opportunity"]]),
            Clause::All(&[&["first"], &["year"], &["twice"]]),
            Clause::All(&[&["head"], &["department"], &["approval"]]),
            Clause::All(&[&["vice"], &["president"], &["approval"]]),
            Clause::All(&[&["same"], &["subject"]]),
            Clause::All(&[&["related"], &["subject"]]),
            Clause::All(&[&["postgraduate"], &["failed"]]),
            Clause::All(&[&["earlier"], &["program"]]),
            Clause::All(&[&["can"], &["come"], &["back"]]),
            Clause::All(&[&["apply"], &["again"]]),
        ],
    },
    DomainRule {
        target_key: "ethics_approval",
        bonus: 15,
        clauses: &[
            Clause::Any(&["ethics", "ethical", "research", "participants", "participant", "irb"]),
            Clause::All(&[&["human"], &["subjects"]]),
            Clause::All(&[&["human"], &["participants"]]),
            Clause::All(&[&["approval"], &["research"]]),
            Clause::All(&[&["committee"], &["ethics"]]),
            Clause::All(&[&["ethics"], &["committee"]]),
            Clause::All(&[&["institutional"], &["review"]]),
            Clause::All(&[&["consent"], &["research"]]),
            Clause::All(&[&["informed"], &["consent"]]),
            Clause::All(&[&["study"], &["approval"]]),
            Clause::All(&[&["experiment"], &["approval"]]),
            Clause::All(&[&["survey"], &["approval"]]),
            Clause::All(&[&["interview"], &["approval"]]),
            Clause::All(&[&["data"], &["collection"], &["approval"]]),
            Clause::All(&[&["volunteer"], &["research"]]),
            Clause::All(&[&["research"], &["proposal"]]),
            Clause::All(&[&["methodology"], &["approval"]]),
            Clause::All(&[&["dissertation"], &["research"]]),
            Clause::All(&[&["thesis"], &["research"]]),
            Clause::All(&[&["need"], &["ethics"], &["approval"]]),
            Clause::All(&[&["require"], &["ethics"]]),
            Clause::All(&[&["how"], &["get"], &["ethics"]]),
            Clause::All(&[&["research"], &["ethics"]]),
        ],
    },
    DomainRule {
        target_key: "transcripts_diplomas",
        bonus: 15,
        clauses: &[
            Clause::Any(&["transcript", "transcripts", "diploma", "diplomas", "certificate", "certificates", "apostille", "notarized", "parchment"]),
            Clause::All(&[&["degree"], &["copy", "document", "certificate"]]),
            Clause::All(&[&["official"], &["document", "record", "transcript", "certificate"]]),
            Clause::All(&[&["academic"], &["record", "transcript", "document"]]),
            Clause::All(&[&["graduation"], &["certificate"]]),
            Clause::All(&[&["completion"], &["certificate"]]),
            Clause::All(&[&["certified"], &["copy"]]),
            Clause::All(&[&["verified"], &["copy"]]),
            Clause::All(&[&["authenticated"], &["document"]]),
            Clause::All(&[&["sealed"], &["transcript"]]),
            Clause::All(&[&["registrar"], &["transcript", "certificate"]]),
            Clause::All(&[&["qualification"], &["document"]]),
            Clause::All(&[&["grade"], &["report"]]),
            Clause::All(&[&["mark"], &["sheet"]]),
            Clause::All(&[&["how"], &["get"], &["transcript", "diploma", "certificate"]]),
            Clause::All(&[&["request"], &["transcript", "diploma", "certificate"]]),
            Clause::All(&[&["order"], &["transcript", "diploma", "certificate"]]),
            Clause::All(&[&["employer"], &["transcript", "certificate"]]),
            Clause::All(&[&["job"], &["transcript", "certificate"]]),
        ],
    },
    DomainRule {
        target_key: "computing_facilities",
        bonus: 15,
        clauses: &[
            Clause::Any(&["computer", "computers", "computing", "it", "technology", "tech", "pc", "laptop", "desktop", "workstation", "internet", "wifi", "wi-fi", "network", "software", "application", "print", "printer", "printing", "scan", "scanner", "scanning", "email", "password", "login"]),
            Clause::All(&[&["access"], &["computer", "internet", "it"]]),
            Clause::All(&[&["lab"], &["computer"]]),
            Clause::All(&[&["computer"], &["lab"]]),
            Clause::All(&[&["program"], &["computer"]]),
            Clause::All(&[&["online"], &["access"]]),
            Clause::All(&[&["digital"], &["resource"]]),
            Clause::All(&[&["technical"], &["support"]]),
            Clause::All(&[&["help"], &["desk"]]),
            Clause::All(&[&["account"], &["computer"]]),
            Clause::All(&[&["student"], &["computer"]]),
            Clause::All(&[&["campus"], &["computer"]]),
            Clause::All(&[&["where"], &["computer"]]),
            Clause::All(&[&["how"], &["access"], &["computer"]]),
            Clause::All(&[&["can"], &["use"], &["computer"]]),
            Clause::All(&[&["it"], &["facilities"]]),
            Clause::All(&[&["computing"], &["facilities"]]),
        ],
    },
    DomainRule {
        target_key: "complaints_procedure",
        bonus: 15,
        clauses: &[
            Clause::Any(&["complaint", "complaints", "complain", "complaining", "grievance", "grievances", "problem", "problems", "issue", "issues", "concern", "concerns", "dissatisfied", "dissatisfaction", "unhappy", "disappointed", "upset", "frustrated", "angry", "dispute", "disagreement", "conflict", "unsatisfactory", "substandard", "resolution", "escalate", "ombudsman"]),
            Clause::All(&[&["unfair"], &["treatment"]]),
            Clause::All(&[&["poor"], &["service"]]),
            Clause::All(&[&["bad"], &["experience"]]),
            Clause::All(&[&["formal"], &["complaint"]]),
            Clause::All(&[&["official"], &["complaint"]]),
            Clause::All(&[&["file"], &["complaint"]]),
            Clause::All(&[&["lodge"], &["complaint"]]),
            Clause::All(&[&["submit"], &["complaint"]]),
            Clause::All(&[&["make"], &["complaint"]]),
            Clause::All(&[&["report"], &["problem", "issue", "concern"]]),
            Clause::All(&[&["how"], &["complain"]]),
            Clause::All(&[&["where"], &["complain"]]),
            Clause::All(&[&["who"], &["complain"]]),
            Clause::All(&[&["feedback"], &["negative"]]),
            Clause::All(&[&["resolve"], &["problem", "issue"]]),
        ],
    },
    DomainRule {
        target_key: "tuition_fee_refund",
        bonus: 15,
        clauses: &[
            Clause::Any(&["refund", "withdraw", "tuition", "registration"]),
        ],
    },
    DomainRule {
        target_key: "student_compensation",
        bonus: 15,
        clauses: &[
            Clause::Any(&["compensation", "claim"]),
            Clause::All(&[&["program"], &["cancel", "terminated", "terminate"]]),
            Clause::All(&[&["supervisor"], &["leave"]]),
        ],
    },
    DomainRule {
        target_key: "anti_harassment_policy",
        bonus: 15,
        clauses: &[
            Clause::Any(&["harassment", "bullying", "discrimination", "cyberbullying", "sexual", "abuse", "support", "gender", "equality"]),
        ],
    },
    DomainRule {
        target_key: "anti_harassment_policy",
        bonus: 20,
        clauses: &[
            Clause::All(&[&["report"], &["harassment", "discrimination"]]),
        ],
    },
    DomainRule {
        target_key: "terms_and_conditions",
        bonus: 15,
        clauses: &[
            Clause::Any(&["terms", "conditions", "offer", "admission", "contract", "criminal", "conviction", "disability", "immigration", "visa", "liability"]),
        ],
    },
    DomainRule {
        target_key: "student_privacy_notice",
        bonus: 15,
        clauses: &[
            Clause::Any(&["privacy", "data", "gdpr", "personal", "information", "retention", "access", "records"]),
        ],
    },
    DomainRule {
        target_key: "radicalization_prevention",
        bonus: 15,
        clauses: &[
            Clause::Any(&["radicalization", "extremism", "extremist", "terrorism", "terrorist", "radical", "extreme", "vulnerability"]),
            Clause::All(&[&["freedom"], &["speech"]]),
            Clause::All(&[&["notice"], &["check"], &["share"]]),
        ],
    },
    DomainRule {
        target_key: "malpractice_policy",
        bonus: 15,
        clauses: &[
            Clause::Any(&["malpractice", "wrongdoing", "whistleblowing", "misconduct", "fraud", "disclosure", "good faith", "malicious"]),
            Clause::All(&[&["academic"], &["freedom"]]),
            Clause::All(&[&["report"], &["concern", "problem", "wrong", "consequences"]]),
        ],
    },
    DomainRule {
        target_key: "academic_references",
        bonus: 15,
        clauses: &[
            Clause::Any(&["reference", "references", "referee", "referees", "recommendation", "academic", "professional", "supervisor", "employer", "tutor", "msc", "mba", "master", "admission", "admissions", "application"]),
        ],
    },
    DomainRule {
        target_key: "english_language_requirements",
        bonus: 15,
        clauses: &[
            Clause::Any(&["english", "language", "ielts", "toefl", "cambridge", "proficiency", "cefr", "c1", "c2", "duolingo", "speaking", "writing", "reading", "listening", "fluency", "qualification", "requirements"]),
        ],
    },
    DomainRule {
        target_key: "appeals_complaints_procedures",
        bonus: 15,
        clauses: &[
            Clause::Any(&["appeal", "appeals", "complaint", "complaints", "dissatisfied", "unfair", "review", "decision", "rejected", "denied", "feedback", "formal", "procedure", "process", "principal"]),
            Clause::All(&[&["case"], &["review"]]),
        ],
    },
    DomainRule {
        target_key: "undergraduate_admission_requirements",
        bonus: 15,
        clauses: &[
            Clause::Any(&["undergraduate", "bachelor", "bachelors", "ba", "bsc", "secondary", "diploma", "ib", "a level", "a-level", "3 year", "three year"]),
            Clause::All(&[&["high"], &["school"]]),
            Clause::All(&[&["international"], &["baccalaureate"]]),
            Clause::All(&[&["ielts"], &["6.0"]]),
            Clause::All(&[&["toefl"], &["79"]]),
        ],
    },
    DomainRule {
        target_key: "postgraduate_admission_requirements",
        bonus: 15,
        clauses: &[
            Clause::Any(&["postgraduate", "master", "masters", "msc", "ma", "graduate", "translation", "interpreting"]),
            Clause::All(&[&["web"], &["development"]]),
            Clause::All(&[&["artificial"], &["intelligence"]]),
            Clause::All(&[&["data"], &["science"]]),
            Clause::All(&[&["greek"], &["fluent"]]),
            Clause::All(&[&["ielts"], &["6.5"]]),
            Clause::All(&[&["toefl"], &["87"]]),
            Clause::All(&[&["two"], &["references"]]),
        ],
    },
    DomainRule {
        target_key: "executive_mba_admission_requirements",
        bonus: 15,
        clauses: &[
            Clause::Any(&["executive", "mba", "emba", "managerial", "resume", "cv"]),
            Clause::All(&[&["professional"], &["experience"]]),
            Clause::All(&[&["work"], &["experience"]]),
            Clause::All(&[&["3"], &["years"]]),
            Clause::All(&[&["5"], &["years"]]),
            Clause::All(&[&["three"], &["years"]]),
            Clause::All(&[&["five"], &["years"]]),
            Clause::All(&[&["one"], &["reference"]]),
            Clause::All(&[&["internal"], &["assessment"]]),
        ],
    },
    DomainRule {
        target_key: "academic_structure",
        bonus: 15,
        clauses: &[
            Clause::Any(&["stage", "module", "credit", "consolidation", "depth", "complexity"]),
            Clause::All(&[&["academic"], &["structure"]]),
            Clause::All(&[&["assessment"], &["overview"]]),
            Clause::All(&[&["reading"], &["week"]]),
            Clause::All(&[&["10"], &["hours"]]),
        ],
    },
    DomainRule {
        target_key: "assessment_types",
        bonus: 15,
        clauses: &[
            Clause::Any(&["portfolio", "essay", "report", "project", "self-reflection", "reflection", "presentation", "poster", "quiz", "mcq", "viva"]),
            Clause::All(&[&["assessment"], &["type"]]),
            Clause::All(&[&["literature"], &["review"]]),
            Clause::All(&[&["case"], &["study"]]),
            Clause::All(&[&["multiple"], &["choice"]]),
            Clause::All(&[&["assessed"], &["lab"]]),
            Clause::All(&[&["final"], &["exam"]]),
            Clause::All(&[&["oral"], &["exam"]]),
        ],
    },
    DomainRule {
        target_key: "marking_scheme",
        bonus: 15,
        clauses: &[
            Clause::Any(&["grading", "grades", "marking", "2:1", "2:2"]),
            Clause::All(&[&["marking"], &["scheme"]]),
            Clause::All(&[&["grading"], &["system"]]),
            Clause::All(&[&["grade"], &["system"]]),
            Clause::All(&[&["class"], &["descriptor"]]),
            Clause::All(&[&["40"], &["pass"]]),
            Clause::All(&[&["70"], &["first"]]),
            Clause::All(&[&["60"], &["69"]]),
            Clause::All(&[&["upper"], &["second"]]),
            Clause::All(&[&["50"], &["59"]]),
            Clause::All(&[&["lower"], &["second"]]),
            Clause::All(&[&["third"], &["class"]]),
            Clause::All(&[&["fail"], &["grade"]]),
            Clause::All(&[&["excellent"], &["analysis"]]),
            Clause::All(&[&["strong"], &["understanding"]]),
            Clause::All(&[&["basic"], &["analysis"]]),
            Clause::All(&[&["weak"], &["understanding"]]),
            Clause::All(&[&["first"], &["class"]]),
            Clause::All(&[&["second"], &["class"]]),
            Clause::All(&[&["degree"], &["classification"]]),
        ],
    },
    DomainRule {
        target_key: "feedback_policy",
        bonus: 15,
        clauses: &[
            Clause::Any(&["formative", "summative", "syllabus", "aims", "content", "methods"]),
            Clause::All(&[&["feedback"], &["policy"]]),
            Clause::All(&[&["3"], &["weeks"]]),
            Clause::All(&[&["three"], &["weeks"]]),
            Clause::All(&[&["coursework"], &["returned"]]),
            Clause::All(&[&["google"], &["classroom"]]),
        ],
    },
    DomainRule {
        target_key: "coursework_submission",
        bonus: 15,
        clauses: &[
            Clause::Any(&["turnitin", "deadline", "extension", "backup"]),
            Clause::All(&[&["coursework"], &["submission"]]),
            Clause::All(&[&["cover"], &["sheet"]]),
            Clause::All(&[&["student"], &["id"]]),
            Clause::All(&[&["late"], &["penalty"]]),
            Clause::All(&[&["10"], &["marks"], &["deducted"]]),
            Clause::All(&[&["5"], &["days"]]),
            Clause::All(&[&["illness"], &["proof"]]),
            Clause::All(&[&["technical"], &["issues"]]),
            Clause::All(&[&["workload"], &["pressure"]]),
        ],
    },
    DomainRule {
        target_key: "examination_process",
        bonus: 15,
        clauses: &[
            Clause::Any(&["handwritten", "invigilated"]),
            Clause::All(&[&["final"], &["examination"]]),
            Clause::All(&[&["examination"], &["process"]]),
            Clause::All(&[&["closed"], &["exam"]]),
            Clause::All(&[&["week"], &["13"]]),
            Clause::All(&[&["week"], &["14"]]),
            Clause::All(&[&["week"], &["15"]]),
            Clause::All(&[&["resit"], &["september"]]),
            Clause::All(&[&["university-provided"], &["booklet"]]),
            Clause::All(&[&["computer"], &["approved"]]),
            Clause::All(&[&["disability"], &["arrangement"]]),
            Clause::All(&[&["six"], &["weeks"], &["before"]]),
        ],
    },
    DomainRule {
        target_key: "progression_rules",
        bonus: 15,
        clauses: &[
            Clause::Any(&["graduate", "compensation", "reassessment"]),
            Clause::All(&[&["progression"], &["rules"]]),
            Clause::All(&[&["academic"], &["progression"]]),
            Clause::All(&[&["next"], &["stage"]]),
            Clause::All(&[&["pass"], &["modules"]]),
            Clause::All(&[&["weighted"], &["average"]]),
            Clause::All(&[&["40%"], &["components"]]),
        ],
    },
    DomainRule {
        target_key: "compensation_rules",
        bonus: 15,
        clauses: &[
            Clause::Any(&["30-39%"]),
            Clause::All(&[&["compensation"], &["rules"]]),
            Clause::All(&[&["module"], &["compensation"]]),
            Clause::All(&[&["failed"], &["module"]]),
            Clause::All(&[&["40"], &["credits"]]),
            Clause::All(&[&["below"], &["30"]]),
            Clause::All(&[&["below"], &["10"]]),
            Clause::All(&[&["stage"], &["1"]]),
            Clause::All(&[&["stage"], &["2"]]),
            Clause::All(&[&["stage"], &["3"]]),
            Clause::All(&[&["degree"], &["recognition"]]),
            Clause::All(&[&["professional"], &["bodies"]]),
        ],
    },
    DomainRule {
        target_key: "reassessment_rules",
        bonus: 15,
        clauses: &[
            Clause::Any(&["component-based", "september"]),
            Clause::All(&[&["reassessment"], &["rules"]]),
            Clause::All(&[&["resit"], &["rules"]]),
            Clause::All(&[&["90"], &["credits"]]),
            Clause::All(&[&["50"], &["credits"]]),
            Clause::All(&[&["below"], &["30"]]),
            Clause::All(&[&["one"], &["reassessment"], &["attempt"]]),
            Clause::All(&[&["board"], &["examiners"]]),
            Clause::All(&[&["original"], &["attempt"]]),
            Clause::All(&[&["degree"], &["calculation"]]),
        ],
    },
    DomainRule {
        target_key: "graduation_requirements",
        bonus: 15,
        clauses: &[
            Clause::Any(&["honours"]),
            Clause::All(&[&["graduation"], &["requirements"]]),
            Clause::All(&[&["graduation"], &["classification"]]),
            Clause::All(&[&["degree"], &["classification"]]),
            Clause::All(&[&["grading"], &["classification"]]),
            Clause::All(&[&["360"], &["credits"]]),
            Clause::All(&[&["480"], &["credits"]]),
            Clause::All(&[&["3-year"], &["programme"]]),
            Clause::All(&[&["4-year"], &["programme"]]),
            Clause::All(&[&["stage"], &["2"], &["weighted"]]),
            Clause::All(&[&["stage"], &["3"], &["weighted"]]),
            Clause::All(&[&["first-class"], &["honours"]]),
            Clause::All(&[&["upper"], &["second"]]),
            Clause::All(&[&["lower"], &["second"]]),
            Clause::All(&[&["third-class"], &["honours"]]),
        ],
    },
    DomainRule {
        target_key: "class_schedules",
        bonus: 15,
        clauses: &[
            Clause::Any(&["weekday", "electronic", "mandatory", "lecture", "tutorial", "lab"]),
            Clause::All(&[&["class"], &["schedule"]]),
            Clause::All(&[&["schedule"], &["attendance"]]),
            Clause::All(&[&["week"], &["before"], &["semester"]]),
            Clause::All(&[&["module"], &["names"]]),
            Clause::All(&[&["classroom"], &["location"]]),
            Clause::All(&[&["first"], &["week"]]),
            Clause::All(&[&["medical"], &["issue"]]),
            Clause::All(&[&["public"], &["hospital"]]),
            Clause::All(&[&["maximum"], &["absence"]]),
            Clause::All(&[&["exclusion"], &["study"]]),
        ],
    },
    DomainRule {
        target_key: "code_of_conduct",
        bonus: 15,
        clauses: &[
            Clause::Any(&["punctual", "prepared"]),
            Clause::All(&[&["code"], &["conduct"]]),
            Clause::All(&[&["student"], &["conduct"]]),
            Clause::All(&[&["respectful"], &["learning"]]),
            Clause::All(&[&["scheduled"], &["session"]]),
            Clause::All(&[&["disrupt"], &["class"]]),
            Clause::All(&[&["engage"], &["actively"]]),
            Clause::All(&[&["respect"], &["diversity"]]),
            Clause::All(&[&["discrimination"], &["tolerated"]]),
            Clause::All(&[&["mobile"], &["phone"]]),
            Clause::All(&[&["permission"], &["record"]]),
            Clause::All(&[&["eating"], &["drinking"], &["classroom"]]),
        ],
    },
    DomainRule {
        target_key: "extenuating_circumstances",
        bonus: 15,
        clauses: &[
            Clause::Any(&["claim", "hospitalization", "interview", "extension"]),
            Clause::All(&[&["extenuating"], &["circumstances"]]),
            Clause::All(&[&["exceptional"], &["circumstances"]]),
            Clause::All(&[&["serious"], &["personal"]]),
            Clause::All(&[&["affect"], &["performance"]]),
            Clause::All(&[&["before"], &["assessment"]]),
            Clause::All(&[&["serious"], &["illness"]]),
            Clause::All(&[&["mental"], &["health"]]),
            Clause::All(&[&["family"], &["bereavement"]]),
            Clause::All(&[&["victim"], &["crime"]]),
            Clause::All(&[&["transport"], &["disruption"]]),
            Clause::All(&[&["legal"], &["proceeding"]]),
            Clause::All(&[&["supporting"], &["evidence"]]),
            Clause::All(&[&["medical"], &["document"]]),
            Clause::All(&[&["retake"], &["assessment"]]),
        ],
    },
    DomainRule {
        target_key: "turnitin_policy",
        bonus: 15,
        clauses: &[
            Clause::Any(&["instruction"]),
            Clause::All(&[&["turnitin"], &["policy"]]),
            Clause::All(&[&["turnitin"], &["submission"]]),
            Clause::All(&[&["written"], &["work"]]),
            Clause::All(&[&["plagiarism"], &["check"]]),
            Clause::All(&[&["collusion"], &["check"]]),
            Clause::All(&[&["not"], &["marked"]]),
            Clause::All(&[&["misconduct"], &["serious"]]),
            Clause::All(&[&["reference"], &["job"]]),
            Clause::All(&[&["further"], &["studies"]]),
            Clause::All(&[&["reference"], &["properly"]]),
            Clause::All(&[&["consult"], &["tutor"]]),
        ],
    },
    DomainRule {
        target_key: "disciplinary_issues",
        bonus: 15,
        clauses: &[
            Clause::Any(&["department", "college", "cheating"]),
            Clause::All(&[&["disciplinary"], &["issues"]]),
            Clause::All(&[&["student"], &["disciplinary"]]),
            Clause::All(&[&["disciplinary"], &["action"]]),
            Clause::All(&[&["physical"], &["misconduct"]]),
            Clause::All(&[&["sexual"], &["misconduct"]]),
            Clause::All(&[&["abusive"], &["behavior"]]),
            Clause::All(&[&["threatening"], &["behavior"]]),
            Clause::All(&[&["disruptive"], &["behavior"]]),
            Clause::All(&[&["damaging"], &["property"]]),
            Clause::All(&[&["stealing"], &["property"]]),
            Clause::All(&[&["health"], &["safety"], &["risk"]]),
            Clause::All(&[&["obstructing"], &["college"]]),
            Clause::All(&[&["criminal"], &["conviction"]]),
            Clause::All(&[&["academic"], &["misconduct"]]),
        ],
    },
    DomainRule {
        target_key: "withdrawal_policy",
        bonus: 15,
        clauses: &[
            Clause::Any(&["withdrawal"]),
            Clause::All(&[&["withdrawal"], &["policy"]]),
            Clause::All(&[&["student"], &["withdrawal"]]),
            Clause::All(&[&["permanently"], &["leave"]]),
            Clause::All(&[&["head"], &["department"]]),
            Clause::All(&[&["final"], &["decision"]]),
            Clause::All(&[&["confidential"], &["discussion"]]),
        ],
    },
    DomainRule {
        target_key: "campus_resources",
        bonus: 15,
        clauses: &[
            Clause::Any(&["facilities", "strategakis", "library", "classroom", "l1", "l2", "l3", "l4", "l5", "cafe", "lab", "ethra", "thalis", "auditorium", "registrar", "a1", "a2", "a3", "counselling"]),
            Clause::All(&[&["campus"], &["resources"]]),
            Clause::All(&[&["campus"], &["building"]]),
            Clause::All(&[&["leontos"], &["sofou"]]),
            Clause::All(&[&["prox"], &["koromila"]]),
            Clause::All(&[&["student"], &["services"]]),
            Clause::All(&[&["it"], &["support"]]),
            Clause::All(&[&["psychology"], &["dept"]]),
            Clause::All(&[&["neuroscience"], &["center"]]),
            Clause::All(&[&["executive"], &["room"]]),
            Clause::All(&[&["financial"], &["office"]]),
        ],
    },
    DomainRule {
        target_key: "library_ilc",
        bonus: 15,
        clauses: &[
            Clause::Any(&["ilc", "silent", "pc-equipped"]),
            Clause::All(&[&["information"], &["learning"], &["commons"]]),
            Clause::All(&[&["multifunctional"], &["space"]]),
            Clause::All(&[&["library"], &["collection"]]),
            Clause::All(&[&["library"], &["services"], &["desk"]]),
            Clause::All(&[&["study"], &["room"]]),
            Clause::All(&[&["group"], &["study"]]),
            Clause::All(&[&["collaborative"], &["area"]]),
            Clause::All(&[&["social"], &["space"]]),
        ],
    },
    DomainRule {
        target_key: "student_office",
        bonus: 15,
        clauses: &[
            Clause::Any(&["cultural", "social", "visa", "housing", "sport", "club", "discount"]),
            Clause::All(&[&["student"], &["office"], &["support"]]),
            Clause::All(&[&["academic"], &["development"]]),
            Clause::All(&[&["personal"], &["development"]]),
            Clause::All(&[&["residence"], &["permit"]]),
            Clause::All(&[&["greek"], &["class"]]),
            Clause::All(&[&["union"], &["support"]]),
            Clause::All(&[&["personal"], &["advising"]]),
        ],
    },
    DomainRule {
        target_key: "career_office",
        bonus: 15,
        clauses: &[
            Clause::Any(&["cv", "internship"]),
            Clause::All(&[&["career"], &["employability"], &["office"]]),
            Clause::All(&[&["career"], &["office"]]),
            Clause::All(&[&["career"], &["planning"]]),
            Clause::All(&[&["pursue"], &["career"]]),
            Clause::All(&[&["cover"], &["letter"]]),
            Clause::All(&[&["interview"], &["help"]]),
            Clause::All(&[&["career"], &["fair"]]),
            Clause::All(&[&["career"], &["goal"]]),
            Clause::All(&[&["job"], &["application"], &["support"]]),
        ],
    },
    DomainRule {
        target_key: "student_union",
        bonus: 15,
        clauses: &[
            Clause::Any(&["csu", "representative"]),
            Clause::All(&[&["city"], &["student"], &["union"]]),
            Clause::All(&[&["run"], &["students"]]),
            Clause::All(&[&["student"], &["interest"]]),
            Clause::All(&[&["organize"], &["activit"]]),
            Clause::All(&[&["official"], &["student"], &["voice"]]),
            Clause::All(&[&["election"], &["annual"]]),
        ],
    },
    DomainRule {
        target_key: "academic_representatives",
        bonus: 15,
        clauses: &[
            Clause::All(&[&["academic"], &["representative"]]),
            Clause::All(&[&["student"], &["volunteer"]]),
            Clause::All(&[&["represent"], &["classmate"]]),
            Clause::All(&[&["attend"], &["committee"]]),
            Clause::All(&[&["senate"], &["meeting"]]),
            Clause::All(&[&["apply"], &["4th"], &["week"]]),
            Clause::All(&[&["autumn"], &["semester"]]),
            Clause::All(&[&["demonstrate"], &["good"], &["conduct"]]),
            Clause::All(&[&["improve"], &["academic"], &["experience"]]),
        ],
    },
    DomainRule {
        target_key: "student_evaluation",
        bonus: 15,
        clauses: &[
            Clause::Any(&["seq"]),
            Clause::All(&[&["student"], &["evaluation"]]),
            Clause::All(&[&["feedback"], &["system"]]),
            Clause::All(&[&["anonymous"], &["evaluation"]]),
            Clause::All(&[&["student"], &["evaluation"], &["questionnaire"]]),
            Clause::All(&[&["improve"], &["module"]]),
            Clause::All(&[&["improve"], &["teaching"]]),
            Clause::All(&[&["improve"], &["coursework"]]),
            Clause::All(&[&["improve"], &["feedback"]]),
            Clause::All(&[&["college"], &["services"]]),
            Clause::All(&[&["staff-student"], &["forum"]]),
            Clause::All(&[&["curriculum"], &["service"]]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_for(key: &str) -> Vec<&'static DomainRule> {
        DOMAIN_RULES.iter().filter(|r| r.target_key == key).collect()
    }

    #[test]
    fn test_every_rule_has_clauses() {
        for rule in DOMAIN_RULES {
            assert!(!rule.clauses.is_empty(), "rule for {} has no clauses", rule.target_key);
            assert!(rule.bonus == 15 || rule.bonus == 20, "unexpected bonus for {}", rule.target_key);
        }
    }

    #[test]
    fn test_fees_rule_fires_on_synonyms() {
        let rules = rules_for("fees");
        assert_eq!(rules.len(), 1);
        let rule = rules[0];
        assert!(rule.matches("how much is tuition"));
        assert!(rule.matches("can i pay in installments"));
        assert!(rule.matches("what does it cost"));
        assert!(!rule.matches("where is the library"));
    }

    #[test]
    fn test_cooccurrence_requires_both_sides() {
        let rule = rules_for("fees")[0];
        // "how" alone must not fire; "how" plus "much" must
        assert!(!rule.matches("how are semesters organized"));
        assert!(rule.matches("how much do i owe"));
    }

    #[test]
    fn test_calculator_rule() {
        let rule = rules_for("calculator_policy")[0];
        assert!(rule.matches("can i use a calculator in the exam"));
        assert!(!rule.matches("when are tuition fees due"));
    }

    #[test]
    fn test_anti_harassment_has_narrow_high_confidence_rule() {
        let rules = rules_for("anti_harassment_policy");
        assert_eq!(rules.len(), 2);
        let narrow = rules.iter().find(|r| r.bonus == 20).expect("+20 rule present");
        assert!(narrow.matches("how do i report harassment"));
    }

    #[test]
    fn test_rule_targets_exist_in_corpus() {
        let corpus = crate::corpus::CorpusStore::builtin();
        for rule in DOMAIN_RULES {
            assert!(
                corpus.get(rule.target_key).is_some(),
                "rule targets unknown document {}",
                rule.target_key
            );
        }
    }
}
