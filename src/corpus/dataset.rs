//! Built-in policy dataset
//!
//! The versioned document set for City College Thessaloniki, University of
//! York. Edits to wording happen here and ship as a new release; there is no
//! runtime mutation path.

use super::PolicyDocument;

/// Materialize the built-in corpus in dataset order
pub fn documents() -> Vec<PolicyDocument> {
    RAW.iter()
        .map(|(key, title, body)| PolicyDocument {
            key: (*key).to_string(),
            title: (*title).to_string(),
            body: (*body).to_string(),
        })
        .collect()
}

/// (key, title, body) in the stable dataset order
const RAW: &[(&str, &str, &str)] = &[
    (
        "semesters",
        "Academic Calendar and Semesters",
        "There are two semesters in an academic year; the Autumn semester starts within the first week of October and the Spring Semester starts at the end of February. Specific dates are published during the Spring semester of the previous academic year. Each semester has 15 weeks (12 weeks of classes and 3 weeks for revision and assessments). There is a break between semesters, which normally lasts two weeks.",
    ),
    (
        "academic_structure",
        "Academic Structure & Assessment Overview",
        "Each academic year consists of two semesters (Autumn: Oct\u{2013}Feb, Spring: Mar\u{2013}Jun), each lasting 15 weeks. This includes 10 weeks of lectures, 1 consolidation week, 1 reading week, and 3 weeks for revision and assessments. Each semester offers multiple modules (courses). Undergraduate programmes are split into stages: 3-year UG has Stage 1 (Year 1), Stage 2 (Year 2), Stage 3 (Year 3). 4-year UG has Stage 1 (Years 1 & 2), Stage 2 (Year 3), Stage 3 (Year 4). Modules are units of study with titles, credit values, and assessments. Each credit equals 10 hours of total work (e.g., a 10-credit module = 100 hours). Credit levels (e.g., 4, 5, 6) indicate depth and complexity.",
    ),
    (
        "assessment_types",
        "Assessment Types and Methods",
        "Assessment types include: Portfolio (collection of documents showing work on a topic), Essay/Report (includes literature reviews, case studies, and proposals), Project (planned individual or group work like lab reports, practicum), Self-Reflection (personal insights and learning reflection), Presentation (poster, in-class, or recorded demo to an audience), Tests/Quizzes (short exams like MCQs or exercises), Assessed Labs (practical exams in a lab setting), Final Exam (major exam at semester end, minimum 2 hours), Oral Exam (spoken assessment such as a viva).",
    ),
    (
        "marking_scheme",
        "Marking Scheme and Class Descriptors",
        "Marks range from 0\u{2013}100. A minimum of 40 is needed to pass. Marking criteria: 70\u{2013}100 (First Class: Excellent analysis, structure, research, and referencing), 60\u{2013}69 (Second Class Upper 2:1: Strong understanding and use of sources), 50\u{2013}59 (Second Class Lower 2:2: Basic analysis with some gaps), 40\u{2013}49 (Third Class: Weak understanding, limited research), 1\u{2013}39 (Fail: Poor or no understanding and analysis), 0 (No submission or academic misconduct). Final degree classification is based on Stages 2 and 3, weighted 2:3 respectively.",
    ),
    (
        "feedback_policy",
        "Feedback and Syllabus Information",
        "Feedback types: Formative (ongoing feedback like comments in class), Summative (final grade and written feedback after assessment). Feedback is usually given within 3 weeks. Keep a copy; coursework is not returned. Each module has a syllabus with aims, content, methods, and assessment details, provided via Google Classroom.",
    ),
    (
        "coursework_submission",
        "Coursework Submission and Deadlines",
        "Work is submitted via TurnItIn with a cover sheet, using your student ID only (no names). Once submitted, it cannot be edited. Deadlines are strict: 10 marks deducted per late day (up to 5 days), after 5 days = mark of zero. Extensions are granted only for serious reasons (e.g., illness with proof). Technical issues or workload pressure are not valid excuses. Always back up your work.",
    ),
    (
        "examination_process",
        "Final Examination Process and Procedures",
        "Final closed exams usually take place during weeks 13 to 15 of each semester. Resit exams are held in September. The exact dates are published in advance. Most students write their answers by hand in university-provided booklets, but students with approved needs may use a computer. Exams are monitored (invigilated). Students with disabilities or specific conditions may request individual arrangements, but these must be made at least six weeks before the exam date.",
    ),
    (
        "progression_rules",
        "Academic Progression Requirements",
        "To move to the next stage or graduate, you must pass all modules in the current stage. A pass requires a weighted average of at least 40% across the module's components (e.g. exams and coursework). You may still progress through either compensation or reassessment if you fail modules.",
    ),
    (
        "compensation_rules",
        "Module Compensation Rules",
        "For Stage 1 and 2: You may still earn credits for a failed module (30\u{2013}39%) if you have failed no more than 40 credits, no individual module mark is below 30, and your overall weighted average is at least 40. For Stage 3: You may receive credit if you have failed no more than 40 credits, no module mark is below 10, and your overall weighted average is at least 40. Even if compensation is granted, it's recommended to resit failed modules to avoid issues with degree recognition or further study.",
    ),
    (
        "reassessment_rules",
        "Reassessment and Resit Rules",
        "Stage 1 & 2: You may be reassessed in up to 90 credits, but no more than 50 credits may be below 30. Stage 3: Reassessment allowed in up to 40 credits. You are allowed only one reassessment attempt per module. Not all modules allow reassessment \u{2014} this is stated in the module syllabus. Reassessment is usually component-based (e.g., retaking only the failed part). The Board of Examiners decides which components need to be reassessed. Reassessment is held in September. The original attempt's mark is used in your final degree calculation (not the resit mark).",
    ),
    (
        "graduation_requirements",
        "Graduation Requirements and Classification",
        "To graduate, you must earn: 360 credits for a 3-year programme, 480 credits for a 4-year programme. Your degree classification is based on credit-weighted averages from Stages 2 and 3, with Stage 2 weighted 2 and Stage 3 weighted 3. Classification by Final Average Score: First-Class Honours (70\u{2013}100), Upper Second-Class Honours 2:1 (60\u{2013}69), Lower Second-Class Honours 2:2 (50\u{2013}59), Third-Class Honours (40\u{2013}49).",
    ),
    (
        "class_schedules",
        "Class Schedules and Attendance Requirements",
        "You'll receive your class schedule about a week before the semester starts, including module names, times, durations, and classroom locations. Classes are spread across weekdays and the schedule is available electronically. Attendance is mandatory. You are expected to attend all lectures, tutorials, and labs, starting from the first week. Attendance is an essential part of learning and failure to attend without approval may affect your progression. If you miss classes due to medical issues, inform the Department promptly and provide formal documentation (typically from a public hospital). Exceeding the maximum allowed absences may result in loss of module credits and possible exclusion from study.",
    ),
    (
        "code_of_conduct",
        "Student Code of Conduct",
        "To create a respectful learning environment, you are expected to: Attend all scheduled sessions, be punctual and avoid disrupting classes, come prepared and engage actively, respect diversity\u{2014}discrimination of any kind is not tolerated, keep mobile phones off and ask permission to record sessions, avoid eating or drinking in classrooms.",
    ),
    (
        "extenuating_circumstances",
        "Extenuating and Exceptional Circumstances",
        "If serious personal situations affect your performance, submit a claim for Exceptional Circumstances as early as possible\u{2014}preferably before the assessment. Examples include: serious illness, hospitalization, or mental health issues, close family bereavement, victim of a crime, major transport disruptions, required interviews or legal proceedings. Provide supporting evidence (e.g., medical documents from a public hospital). If approved, you may be allowed to retake assessments or receive an extension. Grades are never changed without reassessment.",
    ),
    (
        "turnitin_policy",
        "Turnitin Submission Policy",
        "All written work must be submitted through Turnitin, which checks for plagiarism and collusion. You'll receive instructions on how to use it. Work not submitted through Turnitin will not be marked. Misconduct cases are taken seriously and can impact references for jobs or further studies. If unsure about how to reference properly, consult your tutor.",
    ),
    (
        "disciplinary_issues",
        "Student Disciplinary Issues and Actions",
        "Students may face disciplinary action by the Department or College if they commit misconduct. Examples include: physical or sexual misconduct, abusive, threatening, or disruptive behavior, damaging or stealing property, creating health or safety risks, obstructing College operations, criminal convictions, academic misconduct (e.g., plagiarism, cheating).",
    ),
    (
        "withdrawal_policy",
        "Student Withdrawal from Studies",
        "If you decide to permanently leave your studies, this is called withdrawal. Speak to your Head of Department before making a final decision. Discussions are confidential.",
    ),
    (
        "campus_resources",
        "Campus Buildings and Facilities",
        "Main Buildings: LEONTOS SOFOU (3 Leontos Sofou Str.) includes Student Services, IT Support, Library, Classrooms (L1\u{2013}L5), Cafe, Labs (Ethra & Thalis), Auditorium, Registrar, Department Offices. STRATEGAKIS (24 Prox. Koromila Str.) includes Psychology Dept., Neuroscience Center, Executive Rooms, Classrooms (A1\u{2013}A3), Student Services, Financial Office, Counselling.",
    ),
    (
        "library_ilc",
        "Information & Learning Commons (ILC)",
        "A multifunctional space that includes: Entire Library collection, Library Services Desk, Study rooms (silent, group, PC-equipped), Collaborative areas and social space.",
    ),
    (
        "student_office",
        "Student Office Support Services",
        "Supports cultural, social, academic, and personal development. Offers help with: Visas and residence permits, Housing, Greek classes, Sports & clubs, Union support, Discounts, Personal advising.",
    ),
    (
        "career_office",
        "Career and Employability Office",
        "Helps students plan and pursue careers. Services include: CV, cover letter, and interview help, Career fairs and internships, Career goal setting, Job application support.",
    ),
    (
        "student_union",
        "CITY Student Union (CSU)",
        "Run by students, for students. CSU: Represents student interests, Organizes activities, Acts as the official student voice, Holds elections annually for representatives.",
    ),
    (
        "academic_representatives",
        "Academic Representatives",
        "Student volunteers who: Represent classmates to staff and CSU, Attend committee and senate meetings, Must apply in the 4th week of the autumn semester, Must demonstrate good conduct, Help improve the academic experience.",
    ),
    (
        "student_evaluation",
        "Student Evaluation and Feedback System",
        "Your feedback matters. Anonymous Student Evaluation Questionnaires (SEQs) are given each semester to improve: Modules and teaching, Coursework and feedback, College services (IT, Library, etc.). Feedback is reviewed by staff-student forums and helps shape future curriculum and services.",
    ),
    (
        "enrollment",
        "Student Enrollment Requirements",
        "No student will be permitted to attend lectures, classes or examinations, or to receive materials issued by the College until enrolled. An enrolled student will be issued with a student card. On enrolment, a student must sign up to the Terms and Conditions and agree to the Ordinances and Regulations of the University and the College. Students must enroll at the start of their program and annually thereafter. Failure may result in withdrawal. Students must keep the College informed of their current address. Students who fail to enroll on time may be deemed withdrawn.",
    ),
    (
        "fees",
        "Tuition Fees and Payment",
        "Fees are determined by the College Administration Board and published on the College's website. The registration fee is a one-off payment and non-refundable unless the application is rejected. Tuition fees exclude Greek taxes and bank charges. Fees are due at the beginning of each semester; payment schedules may differ by program. Students who owe fees from previous sessions may not register again. Late payment may result in loss of student status. Failure to pay within four weeks may result in de-registration unless extended by the Financial Officer. Students with unpaid fees are not eligible for scholarships or prizes. Examination results may be withheld for unpaid tuition fees.",
    ),
    (
        "attendance",
        "Attendance Requirements",
        "Attendance of lectures and classes is compulsory, and the number of absences should not exceed 25% of the total contact hours. This includes absences for medical reasons. A candidate who fails to comply may be denied credits for the relevant module. Allowed absences: 20 contact hours = 5 absences, 24 hours = 6 absences, 28 hours = 7 absences, 30 hours = 8 absences, 36 hours = 9 absences. For PGT programs: 8-9 modules = up to 2 module absences allowed, 14 modules = up to 3 module absences allowed.",
    ),
    (
        "study_periods",
        "Period of Study and Study Duration",
        "BA/BSc degrees: Normal period of study is 3 years full-time (no part-time option available), with a maximum period of 4 years full-time. MA/MSc degrees: Normal period is 1 year full-time or 2 years part-time, maximum 2 years full-time or 3 years part-time. MBA: No full-time option available, normal period 27 months part-time, maximum 4 years part-time. MA with Practicum: Normal period 2 years full-time or 3 years part-time, maximum 3 years full-time or 4 years part-time. These limits do not include any allowance for leave of absence or extension of submission.",
    ),
    (
        "leave_of_absence",
        "Leave of Absence",
        "A leave of absence allows a student to take a break in studies for documented medical or personal reasons. Leave is normally granted for up to one year at a time and a maximum of two years in total. It must be applied for in advance. Retrospective requests will not normally be approved. Leave will not be granted within the student's first month of enrolment. Any student may apply, but approval is not guaranteed and may be subject to the academic department. Visa or permit rules may further restrict this option. During leave, students are expected to pause their studies.",
    ),
    (
        "calculator_policy",
        "Use of Calculators in Examinations",
        "A candidate wishing to use an electronic calculator in an examination must request approval no later than week 10 of the relevant Semester. Approval is granted individually, and each calculator must be presented for attachment of a distinctive marker. Steps: 1) Consult approved/prohibited lists in Departmental Offices, 2) If approved, take to office for marking, 3) If prohibited, do not use, 4) If unlisted, take to office by mid-December. Calculators without external programming and with numeric functions only are generally allowed. Prohibited: those with alphabetic displays of stored data, those capable of external programmability. Using prohibited calculator is treated as unfair means.",
    ),
    (
        "examination_procedures",
        "Examination Day Procedures",
        "Students arriving more than 30 minutes late will not be admitted. Students may not leave until 40 minutes after exam starts and must not leave in final 10 minutes. Bring only essential items in transparent bag. Large bags must be left outside hall. Mobile phones and text-storing devices not allowed - if brought, must be handed to Invigilator. Students missing exam without valid reason will not get special papers and considered failed. Must bring student card with Registration Number to every examination. Check notice board for assigned seating.",
    ),
    (
        "unfair_means",
        "Use of Unfair Means in Assessment",
        "All academic work must be original. Prohibited acts include: Plagiarism (using others' ideas without acknowledgment), Collusion (working together on individual assignments), Submitting bought or commissioned work, Double submission (resubmitting previous work), Fabrication (false data), Use of AI-generated work. Students must sign plagiarism declaration on each assessment. City College Thessaloniki, University of York uses plagiarism detection system - all assignments must be uploaded. Categories: Type A (minor misuse), Type B (extensive deliberate misuse), Type C (unfair means during closed assessments).",
    ),
    (
        "library_regulations",
        "Library Regulations and Rules",
        "Library access requires valid student card to borrow materials. Materials must be returned/renewed by due date - late returns may incur fines. Reference materials must not be removed unless explicitly permitted. Noise must be kept to minimum, mobile phones on silent, calls made outside library. FOOD AND DRINKS: Food and drinks are generally not permitted in the library, except water in sealable bottles. Library computers for academic purposes only, not for gaming or entertainment. Students must not remove materials without properly checking them out. Personal belongings should not be left unattended for security reasons.",
    ),
    (
        "misconduct",
        "Acts of Misconduct",
        "Misconduct is improper interference with College functioning or activities. Examples include: disruption of academic/administrative activities, obstruction of functions, violent/threatening behavior, fraud/deception, actions causing injury/safety risks, harassment/bullying, property damage, misuse of premises, behavior bringing College into disrepute, failure to follow staff instructions, theft of personal data. Report to Department Head with clear description. Investigation may lead to disciplinary hearing. Penalties include warning, suspension, or expulsion.",
    ),
    (
        "scholarships",
        "Scholarships, Awards and Prizes",
        "Student must be in good academic standing with no outstanding disciplinary issues. May be subject to income or nationality criteria. Awards normally based on assessment results, may be withdrawn if performance deteriorates. Must fulfill all financial obligations - no award for students in financial default. False declaration may result in immediate withdrawal and disciplinary measures. Winners may be announced publicly.",
    ),
    (
        "re_admission",
        "Re-admission to City College Thessaloniki, University of York",
        "Students may only be readmitted with approval from the Head of Department and Vice President of Learning & Teaching if they: Were previously excluded from City College Thessaloniki, University of York, Failed or withdrew from a prior program and seek admission to the same or related subject, Studied first year twice before at City College Thessaloniki, University of York, Postgraduates who failed to complete their earlier program.",
    ),
    (
        "ethics_approval",
        "Ethics Approval for Research",
        "Students undertaking research involving human participants, personal data, or tissue must get ethics approval from the Departmental Ethics Committee before starting. Failure to do so may result in disciplinary action.",
    ),
    (
        "transcripts_diplomas",
        "Transcripts and Diploma Supplements",
        "The University will provide a Transcript and/or Diploma Supplement for students who complete a program of study or require evidence of credits obtained. These documents include module levels, credit values, and grades. Students may request transcripts through the College Academic Registrar.",
    ),
    (
        "computing_facilities",
        "Code of Practice for Computing Facilities",
        "Students are granted access to computing facilities to support academic studies. Access is individual and must not be shared. Students must use assigned credentials and not disclose them to others. Activities that threaten system integrity are prohibited. Unauthorized access attempts are forbidden. Use must be legal and ethical - no offensive, obscene, or discriminatory material. Software must not be copied or redistributed without permission. Personal use is allowed if it doesn't interfere with College operations.",
    ),
    (
        "complaints_procedure",
        "Non-Academic Complaints Procedure",
        "Students have the right to complain if College services don't meet standards or if staff/students behave inappropriately. First try informal resolution with the relevant person or Head of Department. If unresolved, submit formal written complaint to Vice President for Academic Affairs within one month of the event. Include clear explanation, evidence, and desired outcome. VP will investigate and respond in writing. If dissatisfied, may appeal to Principal whose decision is final. Malicious or vexatious complaints may result in disciplinary action.",
    ),
    (
        "tuition_fee_refund",
        "Tuition Fee Refund Policy",
        "Tuition fees may be refunded when students withdraw from their course or take leave of absence. Grounds for refunds include: voluntary or involuntary withdrawal, leave of absence (except when ending within same academic year), transfers/downgrades from Master's to Diploma/Certificate (unless due to academic failure), early thesis submission for PGR students (pro-rata monthly basis). Refund calculation based on timing: 50% refund if withdrawal/leave occurs between Intro Week and Week 3, no refund if between Week 6-12. Registration fee deposits are strictly non-refundable. Refunds returned to original payment method. Contact financial@york.citycollege.eu for clarification. Tuition fees NOT refunded for: individual units/modules dropped, leave within same academic year, PGR leave less than 6 months, transfers due to academic failure where services already provided.",
    ),
    (
        "student_compensation",
        "Student Compensation and Refund Policy",
        "This policy covers financial refunds, reductions, or re-delivery of services for material contract breaches or upheld complaints. Compensation applies when City College Thessaloniki, University of York cannot maintain continuity of study or academic disruption occurs. PROGRAM TERMINATION: If program discontinued/terminated mid-way while students enrolled, students may claim compensation for forced withdrawal, transfer to another program at City College Thessaloniki, University of York or another institution, claim financial compensation for additional costs like tuition differences, travel, accommodation. Students may claim compensation for: program cancellation/termination, forced withdrawal, additional costs from transfers, tuition fees, living/maintenance costs, lost time, accommodation/travel expenses. Eligibility: all enrolled students (self-funded or sponsored), refunds only to original payer, normally excludes graduates. Claims process: complete Complaints Procedure first, submit written claim within 14 days response time. For PGR students: if supervisor leaves without replacement, may transfer or claim compensation. Group claims available for large-scale issues. EXTERNAL REVIEW: If dissatisfied with compensation decision, external review available through Office of Independent Adjudicator (OIA). Contact financial@york.citycollege.eu for specific cases.",
    ),
    (
        "anti_harassment_policy",
        "Policy for Discrimination, Bullying, Cyberbullying, Sexual Harassment and Abusive Behavior",
        "City College Thessaloniki, University of York is committed to inclusion, respect, and safety for all staff and students. This policy defines and addresses discrimination, bullying, cyberbullying, sexual harassment, and abusive behavior. Definitions: Sexual harassment (unwelcome sexual remarks/advances), Bullying (persistent offensive behavior undermining confidence), Cyberbullying (online harassment through social networks/messaging), Discrimination (unfavorable treatment based on age, disability, gender, race, religion, sex, sexual orientation, etc.). HOW TO REPORT HARASSMENT: 1) Report incidents immediately to your Academic Director and Head of Department, 2) Contact the Gender Equality Officer directly for support and guidance, 3) Submit written reports to Student Support Office, 4) For urgent situations, contact campus security or administration. For student perpetrators: handled under City College Thessaloniki, University of York Regulations. For staff perpetrators: investigated by Sexual Misconduct Committee chaired by Gender Equality Officer. SUPPORT AVAILABLE: Gender Equality Officer provides confidential support to alleged victims through City College Thessaloniki, University of York Community Counselling Center as appropriate. Counseling services, academic support, and safety measures available. All reports handled with strict GDPR compliance and confidentiality. CONTACTS: Student Support Office (24 Proxenou Koromila St., Thessaloniki), Gender Equality Officer (available through Student Support Office), Campus Administration (main office). Community members encouraged to report incidents promptly to maintain inclusive environment where everyone feels accepted and valued. No retaliation policy strictly enforced.",
    ),
    (
        "terms_and_conditions",
        "Terms and Conditions Relating to Your Offer",
        "These terms form part of your formal admission offer and explain your contractual relationship with City College Thessaloniki, University of York. Key provisions: ACCURACY - Information submitted must be accurate; false/misleading information may result in cancellation of admission. COURSE CHANGES - College may make necessary changes to improve education (content, scheduling, delivery format, assessment); substantial changes allow withdrawal with transfer support and possible refunds. FEES - All tuition fees and costs must be paid on time; failure may result in suspension/exclusion; qualifications not awarded until debts cleared; refunds available in limited cases (visa rejection, refund policy). CRIMINAL CONVICTIONS - Must disclose unspent serious criminal convictions; failure to disclose may lead to disciplinary action or termination. DISABILITY - College supports inclusive environment and implements reasonable adjustments. IMMIGRATION - Non-EU students must show valid visa status; visa revocation may cancel enrollment. LIABILITY - College not responsible for damages beyond control or indirect losses; limited to tuition fees paid. COMPLAINTS - May submit complaints under official procedure; external review available through Office of Independent Adjudicator. Contract governed by Greek law and resolved in Greek courts.",
    ),
    (
        "student_privacy_notice",
        "Student Privacy Notice (Data Protection)",
        "City College Thessaloniki, University of York collects and processes student data under GDPR regulations to manage academic progress, support services, and meet legal obligations. DATA COLLECTED - Personal details, education background, financial data, immigration status, academic performance, health information, career support details, visa documentation. DATA USE - Restricted to legitimate educational, administrative, and legal purposes. SECURITY - Strict data protection and information security policies; not shared with third parties unless legally required. STUDENT RIGHTS - Access personal records through Academic Services, data portability, erasure (marketing data only, not academic records), restriction/objection in some cases, withdraw consent from promotional communications. TRANSFERS - Data may be transferred outside EU for international applications, embassies, sponsors, recruiters. RETENTION - Some data retained permanently to verify attendance/qualifications; other documents stored 6 years after course completion. COMPLAINTS - Contact Academic Services Department or Hellenic Data Protection Authority for data handling concerns.",
    ),
    (
        "radicalization_prevention",
        "Policy on Prevention of Radicalization and Extremism",
        "City College Thessaloniki, University of York upholds freedom of speech while preventing radicalization and extremism. DEFINITIONS - Radicalization: process supporting terrorism and extremist ideologies. Extremism: active opposition to fundamental democratic values, rule of law, liberty, tolerance. VULNERABILITY FACTORS - Extreme literature possession, underachievement, peer rejection, family conflict, identity confusion, poverty, social exclusion, extremist influence, trauma, sudden behavioral changes. REPORTING PROCESS (Notice, Check, Share) - Notice concerning behavior, check with student/colleagues, share concerns with Student Support Office. If radicalization suspected: notify President and Principal, consult staff, involve police if necessary, offer support to student. STAFF CONCERNS - Same process applies; contact line manager or President/Principal for guidance. PROTECTION - Concerns can be raised anonymously; support offered even if individual declines to engage. If someone is becoming an extremist or showing signs of radicalization, follow Notice-Check-Share process immediately.",
    ),
    (
        "malpractice_policy",
        "Policy for Malpractice, Impropriety or Wrongdoing (Whistleblowing)",
        "City College Thessaloniki, University of York enables staff, students, and committee members to raise concerns about malpractice without fear of reprisal. REPORTABLE CONCERNS - Criminal acts, legal breaches, miscarriages of justice, health/safety risks, environmental damage, fraud, maladministration, obstruction of academic freedom, regulation breaches, academic/professional malpractice, concealment of above. ACADEMIC FREEDOM - Right to question, test ideas, express unpopular views without losing privileges. REPORTING PROCESS - Make disclosure to President/Principal or Vice-President; if they're implicated, report to College Executive Board. CONFIDENTIALITY - Handled confidentially though identity may need sharing for investigation. INVESTIGATION - Designated person decides whether to investigate, appoints investigator, informs whistleblower of outcome. PROTECTION - No action against good faith disclosures; malicious claims may lead to disciplinary action; retaliation against whistleblowers may result in disciplinary proceedings. RECORDS - All disclosures documented and kept for 5 years.",
    ),
    (
        "academic_references",
        "Guide to Providing Academic/Professional References",
        "City College Thessaloniki, University of York requires references for admission. REQUIREMENTS - Most Master's courses (MSc, MA) require two references; Executive MBA needs only one professional reference. Recent graduates should provide two academic references; if not possible, professional references accepted from employer (supervisor, head, senior staff), voluntary organization leader, or recognized society official. REFEREE GUIDELINES - References must be in English, commenting on applicant's academic/professional suitability for postgraduate study. Academic referees should include details of academic progress and English proficiency assessment if not native speaker. REQUIRED INFORMATION - Referee's full name and title, institution/business name and address, contact details, relationship to applicant. SUBMISSION - Send via email to admissions@york.citycollege.eu or sealed envelope by post. GDPR NOTICE - References may be disclosed to applicant under GDPR; stick to factual and academic/professional judgments. Contact Admissions Office if trouble securing suitable reference.",
    ),
    (
        "english_language_requirements",
        "English Language Qualifications and Requirements",
        "City College Thessaloniki, University of York requires English proficiency for admission. TWO LEVELS ACCEPTED: MASTERY (CEFR C2) - Bachelor's minimum 169 overall/162 per component, Master's minimum 176 overall/162 per component. Accepted: Cambridge CPE, IELTS 8.5+, ECPE Michigan, Pearson Level 5, Trinity ISE IV, GCSE English Grade C/4, Duolingo (Bachelor's 100/90, Master's 110/90), Greek State Certificate C2. EFFECTIVE OPERATIONAL (CEFR C1) - Bachelor's minimum 169/162, Master's minimum 176/162. Accepted: Cambridge CAE, IELTS (Bachelor's 6.0+, Master's 6.5+), TOEFL iBT (Bachelor's 79+, Master's 87+), Pearson Level 4, Trinity ISE III, Greek State Certificate C1. Multiple testing organizations accepted including Cambridge, IELTS, TOEFL, Pearson, Trinity, City & Guilds, ESB, LanguageCert, Duolingo. Contact admissions@york.citycollege.eu for questions.",
    ),
    (
        "appeals_complaints_procedures",
        "Appeals and Complaints Procedures for Applicants",
        "City College Thessaloniki, University of York provides fair, efficient appeals and complaints process for applicants. SCOPE - Covers academic selection, fee status assessment, admission terms. Does NOT cover tuition fee setting, funding decisions, accommodation allocation. APPEALS - Formal request to review admissions decision within 30 working days. Grounds: college didn't follow published procedures, not all application information considered. Cannot appeal academic judgment about suitability. COMPLAINTS - Formal dissatisfaction with admissions policies/procedures or staff actions. Usually doesn't change admissions decision. PROCESS - Phase 1: Informal feedback from Admissions Office. Phase 2: Formal appeal/complaint via form or written notice, acknowledged within 3 days, response within 15 days. Phase 3: Case Review if unsatisfied, request within 10 days, decision within 28 days by Principal or Case Review Panel. UNACCEPTABLE BEHAVIOR - College may suspend case for unreasonable, aggressive behavior or repeatedly raising resolved issues. Contact: admissions@york.citycollege.eu",
    ),
    (
        "undergraduate_admission_requirements",
        "Undergraduate (Bachelor's) Admission Requirements",
        "UNDERGRADUATE STUDIES (3-year Bachelor's programmes) ADMISSION REQUIREMENTS: SECONDARY EDUCATION DIPLOMAS - High School Leaving Certificate with good performance and High School Diploma, OR International Baccalaureate (IB) Diploma or at least six IB Subject Certificates (including at least three at higher level) with minimum total of 30 points, OR A Levels obtained locally. ENGLISH REQUIREMENTS - Very good knowledge of English certified by: IELTS Academic overall 6.0+ with at least 5.5 in each component, Pearson PTE Academic overall 55+ with no less than 51 in each component, Cambridge CAE overall 169+ with no less than 162 in each component, Cambridge CPE overall 169+ with no less than 162 in each component, TOEFL iBT overall 79+ with minimum 17 Listening/18 Reading/20 Speaking/17 Writing, MSU-CELP CEFR C2, GCSE English minimum Grade C/4, iGCSE English minimum Grade C, Trinity ISE Level 3 with Pass in all components, Duolingo overall 100 with minimum 90 in all components, ECPE, MELAB overall 91+ with minimum 81 writing/listening/GCVR and minimum 3- speaking (accepted until July 2020), Michigan English Test (MET) overall 230+ with minimum 53 in each component. Candidates who completed high school through English medium are exempt (proof required). APPLICATION REQUIREMENTS - Application form (www.york.citycollege.eu), Identity-card size coloured photograph, Certified copy of High-School Leaving Certificate and transcripts from last three years, Certified photocopy of English language qualification, Copy of passport/ID with Latin/English alphabet, Registration fee (one-time, refundable if application rejected or visa denied). Submit to: admissions@york.citycollege.eu or CITY College Admissions Office, 24 Proxenou Koromila St., 54622 Thessaloniki, Greece.",
    ),
    (
        "postgraduate_admission_requirements",
        "Postgraduate (Master's) Admission Requirements",
        "POSTGRADUATE STUDIES (Master's programmes) ADMISSION REQUIREMENTS: BACHELOR'S DEGREE - Bachelor's degree with good performance in any field required for all Master's programmes. SPECIFIC PROGRAMME REQUIREMENTS - MSc Web and Mobile Development / MSc Artificial Intelligence & Data Science: require undergraduate degree in Computer Science, Computer Engineering, or related ICT discipline (candidates with other disciplines considered based on extensive professional practice). MA Translation and Interpreting: candidates must be fluent in Greek language. ENGLISH REQUIREMENTS - Advanced knowledge of English certified by: IELTS Academic overall 6.5+ with at least 5.5 in each component, Pearson PTE Academic overall 61+ with no less than 51 in each component, Cambridge CAE overall 176+ with no less than 162 in each component, Cambridge CPE overall 176+ with no less than 162 in each component, TOEFL iBT overall 87+ with minimum 17 Listening/18 Reading/20 Speaking/17 Writing, MSU-CELP CEFR C2, GCSE English minimum Grade C/4, iGCSE English minimum Grade C, Trinity ISE Level 3 with Pass in all components, Duolingo overall 110 with minimum 90 in all components, ECPE, MELAB overall 91+ with minimum 81 writing/listening/GCVR and minimum 3- speaking, Michigan English Test overall 230+ with minimum 53 in each component. Other qualifications may be considered - contact admissions@york.citycollege.eu. Candidates who completed Bachelor's or higher secondary education through English medium normally exempt (proof required). APPLICATION REQUIREMENTS - Application form, Identity-card size coloured photograph, Certified photocopy of University degree(s) and all transcripts, Certified photocopy of English language qualification, TWO Reference Letters (from academic supervisors, employers, or community leaders - at least one from university professor if possible), Copy of passport/ID, Registration fee (refundable if rejected or visa denied). Submit to: admissions@york.citycollege.eu",
    ),
    (
        "executive_mba_admission_requirements",
        "Executive MBA Admission Requirements",
        "EXECUTIVE MBA ADMISSION REQUIREMENTS: Admission decisions consider three primary areas: 1) PROFESSIONAL EXPERIENCE (length, breadth, depth of professional/managerial experience; potential for career development), 2) ACADEMIC QUALIFICATIONS (Bachelor's degree from accredited institution or previous postgraduate studies with satisfactory achievement), 3) ADDITIONAL CRITERIA (contribution potential to learning experience; motivation; time/energy commitment ability; community service; professional activities; employer support). Group admissions from same company/industry considered based on class composition and individual criteria. Class diversity in job function and industry is objective. STANDARD REQUIREMENTS - Undergraduate degree from accredited institution (doesn't have to be business degree), Minimum 3-5 years professional work experience, Verified English Language Competence. NOTE: Small number of applicants may be accepted without undergraduate degree if they have substantial managerial experience and meet other requirements. ENGLISH REQUIREMENTS - Fluent English command proven by: IELTS Academic overall 6.5+ with at least 5.5 in each component, Pearson PTE Academic overall 61+ with no less than 51 in each component, Cambridge CAE overall 176+ with no less than 162 in each component, Cambridge CPE overall 176+ with no less than 162 in each component, TOEFL iBT overall 87+ with minimum 17 Listening/18 Reading/20 Speaking/17 Writing, MSU-CELP CEFR C2, GCSE English minimum Grade C/4, iGCSE English minimum Grade C, Trinity ISE Level 3 with Pass in all components, Duolingo overall 110 with minimum 90 in all components, ECPE, MELAB overall 91+, Michigan English Test overall 230+. Other qualifications may be considered. Candidates who completed Bachelor's/higher secondary through English medium normally exempt. Executive MBA applicants without formal English qualification but meeting other requirements may take Internal English Language Assessment Test. APPLICATION REQUIREMENTS - Application form, Identity-card photograph, Certified photocopy of University degree(s) and transcripts, Certified photocopy of English language qualification (or Internal Assessment), ONE Reference Letter from employment supervisor, Current Resume/CV (no standard format), Copy of passport/ID, Registration fee (refundable if rejected/visa denied). Submit to: admissions@york.citycollege.eu",
    ),
];
