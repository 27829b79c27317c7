//! Built-in DSAR readiness catalogue.
//!
//! Seven sections covering UK GDPR subject access readiness, with
//! references to ICO guidance and enforcement. The table is compiled in
//! and materialised once into a validated [`Catalogue`].

use super::catalogue::{Catalogue, Question, Section};
use super::taxonomy::{Effort, Severity};
use std::sync::OnceLock;

/// Name recorded in report metadata for the built-in catalogue.
pub const BUILTIN_CATALOGUE_NAME: &str = "DSAR Readiness Assessment";

/// Revision of the built-in question set.
pub const BUILTIN_CATALOGUE_VERSION: &str = "2025.1";

struct SectionDef {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

struct QuestionDef {
    id: &'static str,
    section_id: &'static str,
    text: &'static str,
    guidance: &'static str,
    reference: &'static str,
    weight: u8,
    severity: Severity,
    effort: Effort,
    remediation: &'static str,
}

static BUILTIN: OnceLock<Catalogue> = OnceLock::new();

impl Catalogue {
    /// The built-in DSAR readiness catalogue, loaded on first use.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in question table breaks a catalogue
    /// invariant. The table is static, so this is a programming error.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            let (sections, questions) = builtin_parts();
            match Self::new(
                BUILTIN_CATALOGUE_NAME,
                Some(BUILTIN_CATALOGUE_VERSION.to_string()),
                sections,
                questions,
            ) {
                Ok(catalogue) => catalogue,
                Err(e) => panic!("built-in catalogue is invalid: {e}"),
            }
        })
    }
}

fn builtin_parts() -> (Vec<Section>, Vec<Question>) {
    let sections = SECTIONS
        .iter()
        .map(|def| Section {
            id: def.id.to_string(),
            label: def.label.to_string(),
            icon: Some(def.icon.to_string()),
            question_ids: QUESTIONS
                .iter()
                .filter(|q| q.section_id == def.id)
                .map(|q| q.id.to_string())
                .collect(),
        })
        .collect();

    let questions = QUESTIONS
        .iter()
        .map(|def| Question {
            id: def.id.to_string(),
            section_id: def.section_id.to_string(),
            text: def.text.to_string(),
            guidance: def.guidance.to_string(),
            reference: def.reference.to_string(),
            weight: def.weight,
            severity: Some(def.severity),
            effort: Some(def.effort),
            remediation: Some(def.remediation.to_string()),
        })
        .collect();

    (sections, questions)
}

static SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: "governance",
        label: "Governance & Preparation",
        icon: "§1",
    },
    SectionDef {
        id: "recognition",
        label: "Request Recognition & Intake",
        icon: "§2",
    },
    SectionDef {
        id: "discovery",
        label: "Data Discovery & Search",
        icon: "§3",
    },
    SectionDef {
        id: "response",
        label: "Response Management",
        icon: "§4",
    },
    SectionDef {
        id: "redaction",
        label: "Redaction & Exemptions",
        icon: "§5",
    },
    SectionDef {
        id: "delivery",
        label: "Delivery & Compliance",
        icon: "§6",
    },
    SectionDef {
        id: "volume",
        label: "Volume & Scalability",
        icon: "§7",
    },
];

static QUESTIONS: &[QuestionDef] = &[
    // Governance & Preparation
    QuestionDef {
        id: "gov-1",
        section_id: "governance",
        text: "Do you have a documented DSAR policy that sets out how your organisation handles subject access requests?",
        guidance: "The ICO expects organisations to have a clear, written policy covering how DSARs are received, logged, escalated and responded to. This should be accessible to all staff who might receive a request.",
        reference: "ICO Right of Access guidance: 'How can we prepare for a SAR?'",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Moderate,
        remediation: "Draft a DSAR policy covering: how requests are received and logged, who is responsible, identity verification steps, search methodology, exemption assessment process, redaction approach, response templates, and escalation procedures. Have it approved by your DPO or senior management.",
    },
    QuestionDef {
        id: "gov-2",
        section_id: "governance",
        text: "Have you appointed a specific person or central team responsible for handling DSARs?",
        guidance: "The ICO states that organisations should appoint a specific person or central team responsible for responding to requests, with contingency if someone is absent. Without clear ownership, requests fall through the cracks.",
        reference: "ICO Right of Access guidance: Preparation",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Quick,
        remediation: "Formally designate a DSAR lead or team with documented responsibilities. Ensure cover arrangements for absence. Communicate the role to all staff so they know where to escalate requests.",
    },
    QuestionDef {
        id: "gov-3",
        section_id: "governance",
        text: "Do all staff who interact with the public or handle personal data receive training on recognising and escalating DSARs?",
        guidance: "A DSAR does not need to mention 'subject access request', 'GDPR', or 'Article 15'. Staff must recognise informal requests like 'can you tell me what information you hold on me?' as valid DSARs. The ICO has reprimanded organisations where front-line staff failed to identify requests.",
        reference: "ICO SAR Q&A for Employers (May 2023)",
        weight: 3,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Develop a short training module covering: what constitutes a valid DSAR, examples of informal requests, the escalation process, and consequences of failing to recognise a request. Deliver to all customer-facing and HR staff annually.",
    },
    QuestionDef {
        id: "gov-4",
        section_id: "governance",
        text: "Do you maintain a log of all DSARs received, tracking status, deadlines, and outcomes?",
        guidance: "In December 2024 the ICO reprimanded an NHS Trust for failing to respond to 32% of DSARs on time, citing inadequate logging systems as a root cause. A SAR log should record: date received, deadline, current status, who is handling it, what was disclosed, and any exemptions applied.",
        reference: "ICO enforcement: NHS Trust reprimand (Dec 2024)",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Quick,
        remediation: "Create a DSAR log tracking: date received, requester identity, deadline date, assigned handler, current status, extension details, date responded, and outcome summary. Review weekly.",
    },
    QuestionDef {
        id: "gov-5",
        section_id: "governance",
        text: "Do you have documented retention and deletion policies for personal data across your systems?",
        guidance: "Retention policies directly affect DSAR responses — you cannot disclose data you should have deleted, and you cannot claim data doesn't exist if your retention schedule required you to keep it. The ICO expects documented retention policies as part of DSAR preparedness.",
        reference: "ICO Right of Access guidance: Preparation",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Significant,
        remediation: "Document retention periods for each category of personal data, mapped to lawful basis and business purpose. Implement deletion processes. This is a larger project but directly affects DSAR compliance.",
    },
    QuestionDef {
        id: "gov-6",
        section_id: "governance",
        text: "Does your senior leadership receive regular reporting on DSAR volumes, response times, and compliance rates?",
        guidance: "Organisations that were reprimanded by the ICO for DSAR backlogs typically had no management visibility of the problem until it became a crisis. Regular reporting to leadership on DSAR metrics is a governance essential.",
        reference: "ICO Lessons Learned from Reprimands (2024)",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Quick,
        remediation: "Add DSAR metrics to existing board or leadership reporting: volume received, percentage responded on time, current backlog, and ICO complaints. Monthly or quarterly depending on volume.",
    },
    // Request Recognition & Intake
    QuestionDef {
        id: "rec-1",
        section_id: "recognition",
        text: "Can your organisation identify a DSAR regardless of how it arrives — email, letter, phone call, social media, or verbally in person?",
        guidance: "DSARs are valid regardless of the channel used. An individual does not need to use a specific form, mention legislation, or direct the request to a particular person. The ICO has confirmed that requests via social media, voicemail, and even casual conversations can constitute valid DSARs.",
        reference: "ICO Right of Access guidance: 'How do we recognise a SAR?'",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Moderate,
        remediation: "Document all channels through which DSARs could arrive (email, post, phone, social media, in-person). Create a process for each channel ensuring requests are captured and routed to the DSAR team. Train front-line staff on recognition.",
    },
    QuestionDef {
        id: "rec-2",
        section_id: "recognition",
        text: "Do you have a process for recording DSARs that are made verbally (in person or by telephone)?",
        guidance: "The ICO checklist specifically requires a policy for recording verbal requests. If someone asks 'what information do you hold on me?' during a phone call, that is a valid DSAR and the clock starts immediately.",
        reference: "ICO SAR checklist",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Create a verbal DSAR form for staff to complete when they receive a request by phone or in person. The form should capture: date/time, requester name, what was requested, and channel. The clock starts at the point of the verbal request.",
    },
    QuestionDef {
        id: "rec-3",
        section_id: "recognition",
        text: "Can you handle DSARs made by third parties on behalf of the data subject (e.g. solicitors, relatives, union representatives)?",
        guidance: "Third-party DSARs are valid. You need a process to verify that the third party has authority to act on behalf of the data subject, without using this as a reason to delay the response. The ICO guidance is clear that you cannot refuse simply because a third party made the request.",
        reference: "ICO Right of Access guidance: Third-party requests",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Document a third-party verification process: what evidence of authority you will accept (written authorisation, power of attorney, parental responsibility), response timelines, and how to handle requests where authority is unclear.",
    },
    QuestionDef {
        id: "rec-4",
        section_id: "recognition",
        text: "Do you have a proportionate identity verification process that does not create unnecessary barriers to access?",
        guidance: "You may verify identity where you have reasonable doubts, but the ICO warns against using ID verification as a delaying tactic. You should not demand excessive documentation — particularly from existing customers or employees whose identity you already know.",
        reference: "ICO Right of Access guidance: Identity verification",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Document proportionate ID verification criteria. For existing customers/employees, consider what you already know. Only request additional verification where you have genuine doubt. Do not use verification as a delay tactic.",
    },
    QuestionDef {
        id: "rec-5",
        section_id: "recognition",
        text: "Do you make a DSAR submission form available while making clear that using it is optional?",
        guidance: "The ICO permits organisations to offer a standard form to help requesters specify what they want, but you cannot insist on its use. A request is valid regardless of format. Making a form available can help manage requests efficiently, but refusing requests that do not use the form is non-compliant.",
        reference: "ICO Right of Access guidance: Preparation",
        weight: 1,
        severity: Severity::Low,
        effort: Effort::Quick,
        remediation: "Make a DSAR submission form available on your website or intranet, clearly stating it is optional. Include fields for: name, contact details, what information is requested, and any specific time period.",
    },
    // Data Discovery & Search
    QuestionDef {
        id: "dis-1",
        section_id: "discovery",
        text: "Do you maintain an information asset register or data map showing where personal data is stored across your organisation?",
        guidance: "The ICO expects organisations to maintain information asset registers showing where and how personal data is stored. Without this, you cannot conduct a reasonable search in response to a DSAR. This is the single biggest operational barrier to DSAR compliance.",
        reference: "ICO Right of Access guidance: Preparation; ICO NHS Trust reprimand citing incomplete RoPA",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Significant,
        remediation: "Create an information asset register listing: each system holding personal data, data categories, data controller/processor status, retention period, and search capability. Start with the systems most likely to feature in DSAR responses (email, HR, CRM).",
    },
    QuestionDef {
        id: "dis-2",
        section_id: "discovery",
        text: "Can you search for personal data across your email systems (including archived mailboxes and shared inboxes)?",
        guidance: "Email is typically the largest source of personal data in a DSAR response. The ICO's guidance confirms that retrieving electronic data includes recovering archived information and back-up records. Organisations that cannot efficiently search across email systems consistently miss deadlines.",
        reference: "ICO Right of Access guidance: 'How do we find and retrieve the relevant information?'",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Significant,
        remediation: "Establish email search capability across live, archived, and shared mailboxes. Determine whether your email platform supports content search across all mailbox types. If not, evaluate tools or services that can provide this capability.",
    },
    QuestionDef {
        id: "dis-3",
        section_id: "discovery",
        text: "Can you search for personal data in your HR systems, including employment records, appraisals, disciplinary files, and grievance records?",
        guidance: "Employment-related DSARs are the most common type the ICO sees. The employer SAR Q&A (2023) specifically addresses searching HR files, appraisal records, and disciplinary documentation. Many organisations fail because HR data is spread across multiple systems with no unified search.",
        reference: "ICO SAR Q&A for Employers (May 2023)",
        weight: 3,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Map all HR data locations: core HRIS, appraisal systems, disciplinary records, training records, absence management, payroll. Document the search process for each and identify who has access to conduct searches.",
    },
    QuestionDef {
        id: "dis-4",
        section_id: "discovery",
        text: "Can you search for personal data in your CRM, case management, and customer service systems?",
        guidance: "Customer-facing organisations must be able to locate data across all systems where customer interactions are recorded. This includes CRM platforms, ticketing systems, complaint logs, and customer service records.",
        reference: "ICO Right of Access guidance: Search and retrieval",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Document how to search CRM and customer service systems for a specific individual. Include: search fields available, data export options, and any limitations on historical data access.",
    },
    QuestionDef {
        id: "dis-5",
        section_id: "discovery",
        text: "Can you search for personal data held in file shares, cloud storage (SharePoint, OneDrive, Google Drive), and document management systems?",
        guidance: "Unstructured data in file shares is frequently missed in DSAR searches. The ICO expects you to search all locations where personal data is reasonably likely to be found, including shared drives and cloud storage platforms.",
        reference: "ICO Right of Access guidance: Search and retrieval",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Establish search capability across SharePoint, OneDrive, Google Drive, and file shares. Document which search tools are available and any limitations on searching file contents versus metadata only.",
    },
    QuestionDef {
        id: "dis-6",
        section_id: "discovery",
        text: "Can you locate and retrieve personal data from databases, line-of-business applications, and back-office systems?",
        guidance: "Personal data in structured databases (finance systems, billing platforms, operational databases) must be searchable. The challenge is often that these systems were not designed with data subject access in mind, making extraction difficult.",
        reference: "ICO Right of Access guidance: Search and retrieval",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Significant,
        remediation: "For each database and line-of-business application, document: what personal data it holds, how to search by individual, how to export data, and who has the technical access to perform searches.",
    },
    QuestionDef {
        id: "dis-7",
        section_id: "discovery",
        text: "Can you search for CCTV footage and other surveillance data relating to a specific individual?",
        guidance: "The ICO employer Q&A confirms that workers who request footage containing their personal data have a right to receive it. Your CCTV system should allow you to locate, extract, and redact footage. If it does not have this functionality, you must still endeavour to comply.",
        reference: "ICO SAR Q&A for Employers: CCTV",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Moderate,
        remediation: "Document your CCTV retention periods and search capability. Determine whether you can locate footage relating to a specific individual and time period. If extraction and redaction of third parties is not possible, document why.",
    },
    QuestionDef {
        id: "dis-8",
        section_id: "discovery",
        text: "Do you understand the new 'reasonable and proportionate search' standard introduced by the Data (Use and Access) Act 2025?",
        guidance: "The DUA Act 2025 codified the principle that you only need to carry out a reasonable and proportionate search. Volume of data, complexity of systems, and cost of retrieval are now explicitly relevant factors. This does not reduce the obligation — it clarifies the standard. Organisations should document their search methodology to demonstrate reasonableness.",
        reference: "ICO Right of Access guidance (updated Dec 2025 for DUA Act)",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Quick,
        remediation: "Review the DUA Act 2025 reasonable search provisions. Document your search methodology and the factors you consider when determining scope. This becomes your defence if the ICO questions your approach.",
    },
    // Response Management
    QuestionDef {
        id: "res-1",
        section_id: "response",
        text: "Do you have a system to track the one-month statutory deadline for each DSAR from the date of receipt?",
        guidance: "The one-month clock starts on the day of receipt, not when the request is logged or acknowledged. The ICO's enforcement actions consistently cite missed deadlines as a primary failure — Southampton NHS Trust responded to only 59% on time, Lewisham Council managed just 35%.",
        reference: "ICO enforcement actions 2022–2024",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Quick,
        remediation: "Implement deadline tracking in your DSAR log. Calculate the one-month deadline from date of receipt (not logging date). Set automated reminders at 7 days and 3 days before deadline. Assign responsibility for deadline monitoring.",
    },
    QuestionDef {
        id: "res-2",
        section_id: "response",
        text: "Do you have a process for seeking clarification from the requester, and do you understand when the clock can be paused?",
        guidance: "Under the DUA Act 2025 changes, the time limit for responding is now explicitly paused while you wait for the data subject to clarify their request. This is a significant change — previously the position was less clear. You should document when clarification was sought and when the response was received.",
        reference: "ICO Right of Access guidance (updated Dec 2025)",
        weight: 3,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Document your clarification process: when to seek it, how to record the request and response, and how the clock pause works under the DUA Act 2025. Create a template clarification email.",
    },
    QuestionDef {
        id: "res-3",
        section_id: "response",
        text: "Do you have clear criteria for determining when a request is complex enough to justify extending the deadline by up to two further months?",
        guidance: "Extension is permitted for complex requests or where you receive multiple requests from the same individual. You must inform the requester within one month of receipt, explaining why the extension is necessary. The ICO expects this to be used genuinely, not as a default delay tactic.",
        reference: "ICO Right of Access guidance: Responding to requests",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Quick,
        remediation: "Document criteria for when an extension is justified. Create a template extension notification letter that explains the reason and the new deadline. Record all extensions in the DSAR log.",
    },
    QuestionDef {
        id: "res-4",
        section_id: "response",
        text: "Do you send an acknowledgement to the requester confirming receipt of their DSAR?",
        guidance: "While not a strict legal requirement, acknowledging receipt is considered good practice by the ICO. It manages expectations, confirms the deadline, and provides an opportunity to seek clarification if needed. Failure to acknowledge is a common complaint to the ICO.",
        reference: "ICO Right of Access guidance: Good practice",
        weight: 1,
        severity: Severity::Low,
        effort: Effort::Quick,
        remediation: "Create a standard acknowledgement template confirming: receipt of the request, the statutory deadline, what will happen next, and contact details for queries. Send within 2 working days of receipt.",
    },
    QuestionDef {
        id: "res-5",
        section_id: "response",
        text: "Do you have templates or standard processes for DSAR responses that ensure all required supplementary information is included?",
        guidance: "A DSAR response must include not just the personal data but also supplementary information: purposes of processing, categories of data, recipients or categories of recipients, retention periods, the right to complain, the source of the data, and information about automated decision-making. Incomplete responses are a common ICO finding.",
        reference: "ICO Right of Access guidance: Article 15 requirements",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Create response templates that include all Article 15 supplementary information: purposes of processing, categories of data, recipients, retention periods, rights, source of data, and automated decision-making information.",
    },
    // Redaction & Exemptions
    QuestionDef {
        id: "red-1",
        section_id: "redaction",
        text: "Do you have a process for identifying and redacting third-party personal data from DSAR responses?",
        guidance: "Most DSAR responses contain information about other people — colleagues mentioned in emails, other customers in shared records. You must balance the requester's right of access against the third party's rights and freedoms. The ICO expects a documented process for making these balancing decisions.",
        reference: "ICO Right of Access guidance: 'Exemptions: information about other people'",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Moderate,
        remediation: "Document your third-party data identification and redaction process. Define the balancing test criteria: consent of third party, reasonable expectations, impact on rights. Use proper redaction tools that permanently remove content.",
    },
    QuestionDef {
        id: "red-2",
        section_id: "redaction",
        text: "Can you identify and correctly apply the exemptions in the Data Protection Act 2018 (legal privilege, management forecasts, negotiations, confidential references, etc.)?",
        guidance: "Schedule 2 of the DPA 2018 contains exemptions that may apply to specific categories of data within a DSAR response. Common ones include: legal professional privilege, management forecasts, records of intentions in negotiations, and confidential references given by your organisation. Applying these incorrectly — either over-redacting or under-redacting — creates risk.",
        reference: "ICO Right of Access guidance: 'When can we refuse a SAR?'",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Moderate,
        remediation: "Create an exemption assessment checklist covering DPA 2018 Schedule 2 exemptions: legal privilege, management forecasts, negotiations, confidential references. For each, document the criteria and require written justification.",
    },
    QuestionDef {
        id: "red-3",
        section_id: "redaction",
        text: "Do you have clear criteria for determining whether a request is manifestly unfounded or manifestly excessive?",
        guidance: "This is a high bar. The ICO has clarified that 'manifestly unfounded' means clearly or obviously made for a purpose other than exercising the right of access — for example, to harass. 'Manifestly excessive' considers the volume and frequency of requests. You bear the burden of proving this, so document your reasoning carefully.",
        reference: "ICO Right of Access guidance: 'Manifestly unfounded or excessive'",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Document criteria for manifestly unfounded or excessive requests. Note that the burden of proof is on you. Create a template refusal letter for use in genuinely excessive cases.",
    },
    QuestionDef {
        id: "red-4",
        section_id: "redaction",
        text: "Do you have a process for handling DSARs that involve whistleblowing, grievance, or disciplinary information?",
        guidance: "Employment DSARs often involve sensitive internal processes. The ICO employer Q&A addresses whistleblower scenarios — you must balance access rights against protections under the Public Interest Disclosure Act 1998. Similarly, disciplinary and grievance records require careful handling of management opinions and third-party statements.",
        reference: "ICO SAR Q&A for Employers: Whistleblowing scenario",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Moderate,
        remediation: "Create specific guidance for handling employment DSARs involving sensitive processes: whistleblowing (PIDA protections), grievances (management opinions), disciplinary (investigation notes). Consult employment law guidance.",
    },
    QuestionDef {
        id: "red-5",
        section_id: "redaction",
        text: "When redacting, do you use appropriate tools rather than methods that can be reversed (e.g. black highlighting in Word that can be removed)?",
        guidance: "Ineffective redaction is a data breach. Using Word formatting, PDF annotations that can be removed, or simple black highlighting risks disclosing the very information you intended to protect. Proper redaction tools permanently remove content from the document.",
        reference: "ICO data breach guidance",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Ensure your team uses proper redaction tools that permanently remove content. Test that redacted PDFs cannot be reversed. Ban the use of Word black highlighting or PDF annotation tools for redaction.",
    },
    QuestionDef {
        id: "red-6",
        section_id: "redaction",
        text: "Do you provide recipients with specific named recipients of their data (not just 'categories of recipients') in your DSAR response?",
        guidance: "Recent case law (Harrison v Cameron, ACL) has clarified that controllers should name specific recipients where possible. The ICO updated guidance now states that providing only categories is permitted only where naming specific recipients would be impossible or the request is manifestly unfounded or excessive. This is a significant tightening.",
        reference: "ICO Right of Access guidance (updated Dec 2025); Harrison v Cameron",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Quick,
        remediation: "Review your response templates to ensure you provide named recipients where possible, not just categories. Update in line with Harrison v Cameron and the December 2025 ICO guidance update.",
    },
    // Delivery & Compliance
    QuestionDef {
        id: "del-1",
        section_id: "delivery",
        text: "Can you deliver DSAR responses securely, using encryption or a secure portal rather than unencrypted email?",
        guidance: "You are responsible for ensuring the security of the personal data you disclose. Sending a DSAR response containing sensitive personal data via unencrypted email is itself a potential data breach. The ICO expects appropriate security measures for disclosure.",
        reference: "ICO Right of Access guidance: 'How can we supply information to the requester?'",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Moderate,
        remediation: "Implement a secure delivery mechanism: encrypted email, secure file transfer portal, or password-protected archive. Do not send DSAR responses containing sensitive data via unencrypted email.",
    },
    QuestionDef {
        id: "del-2",
        section_id: "delivery",
        text: "Do you provide DSAR responses in a commonly used electronic format when the request was made electronically?",
        guidance: "If the request is made electronically, the response should be provided in a commonly used electronic format unless the individual requests otherwise. You should consider whether the requester can actually access the format you provide — sending a .pst file to a consumer is not helpful.",
        reference: "ICO Right of Access guidance: Format of response",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Quick,
        remediation: "Default to commonly used electronic formats (PDF) for electronic requests. Ask the requester if they have a format preference. Avoid proprietary formats that require specialist software.",
    },
    QuestionDef {
        id: "del-3",
        section_id: "delivery",
        text: "Do you include all required supplementary information in your DSAR response (purposes, recipients, retention periods, rights, source of data, automated decision-making)?",
        guidance: "Article 15(1) and (2) UK GDPR require you to provide comprehensive supplementary information alongside the personal data itself. Many organisations focus on gathering the data but forget to include the supplementary information, which is a compliance failure.",
        reference: "Article 15 UK GDPR",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Update your response templates to include all Article 15(1) and (2) supplementary information. Create a checklist to verify completeness before sending each response.",
    },
    QuestionDef {
        id: "del-4",
        section_id: "delivery",
        text: "When refusing a DSAR (in whole or part), do you inform the requester of their right to complain to the ICO and to seek a judicial remedy?",
        guidance: "If you refuse any part of a DSAR or apply exemptions, you must tell the requester: the reasons for refusal, their right to complain to the ICO, and their right to seek a court order. Failure to provide this information is itself a breach, even if the refusal was justified.",
        reference: "ICO Right of Access guidance: Refusal requirements",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Add standard wording to all refusal/partial refusal letters informing the requester of: their right to complain to the ICO (with contact details), and their right to seek a judicial remedy.",
    },
    QuestionDef {
        id: "del-5",
        section_id: "delivery",
        text: "Do you keep records of what was disclosed, what was withheld, and the reasons for any redactions or exemptions applied?",
        guidance: "If the ICO investigates a complaint about your DSAR response, you will need to demonstrate what you searched, what you found, what you disclosed, what you withheld and why. Without contemporaneous records, you cannot defend your decisions.",
        reference: "ICO Right of Access guidance: Preparation (SAR logs)",
        weight: 2,
        severity: Severity::High,
        effort: Effort::Quick,
        remediation: "Extend your DSAR log to record: what was disclosed, what was withheld, exemptions applied with justification, and who reviewed the response. This is your audit trail if the ICO investigates.",
    },
    // Volume & Scalability
    QuestionDef {
        id: "vol-1",
        section_id: "volume",
        text: "Do you know how many DSARs your organisation received in the last 12 months?",
        guidance: "If you cannot answer this question, you almost certainly have a logging gap. Organisations reprimanded by the ICO commonly lacked basic visibility of their DSAR volumes. Knowing your numbers is the foundation for capacity planning.",
        reference: "ICO enforcement: systemic DSAR failures",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Quick,
        remediation: "Start tracking DSAR volumes immediately. If you have no records, estimate from email searches and team recollections. Going forward, ensure every DSAR is logged from day one.",
    },
    QuestionDef {
        id: "vol-2",
        section_id: "volume",
        text: "What percentage of your DSARs are responded to within the one-month statutory deadline?",
        guidance: "The ICO has reprimanded organisations with on-time rates of 35% (Lewisham Council), 59% (Southampton NHS Trust), and 68% (an NHS Trust in 2024). If your on-time rate is below 90%, you have a systemic problem that requires process and technology intervention.",
        reference: "ICO enforcement actions 2022–2024",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Quick,
        remediation: "Calculate your on-time response rate from the DSAR log. If below 90%, investigate root causes: is it capacity, process, or technology? The ICO has reprimanded organisations with rates as low as 35%.",
    },
    QuestionDef {
        id: "vol-3",
        section_id: "volume",
        text: "Do you have a current backlog of unanswered DSARs?",
        guidance: "A backlog is the strongest signal of systemic failure. The ICO's 2022 crackdown targeted organisations with backlogs of hundreds or thousands of unanswered DSARs, including the Ministry of Defence and Home Office. If you have a backlog, you need a clearance plan and process redesign.",
        reference: "ICO DSAR enforcement crackdown (2022)",
        weight: 3,
        severity: Severity::Critical,
        effort: Effort::Significant,
        remediation: "If you have a backlog, create a clearance plan: prioritise by age (oldest first), assign dedicated resource, set a target clearance date, and report progress weekly to leadership. The ICO will treat an active clearance plan more favourably than denial.",
    },
    QuestionDef {
        id: "vol-4",
        section_id: "volume",
        text: "Do you use any technology to assist with DSAR processing (e.g. automated search, PII identification, redaction tools)?",
        guidance: "Manual DSAR processing does not scale. Organisations handling more than a handful of DSARs per month need technology support for data discovery, PII identification, and redaction. The cost of manual processing typically exceeds the cost of automation within the first year.",
        reference: "General best practice",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Significant,
        remediation: "Evaluate technology options for DSAR processing: automated data discovery, PII identification, redaction tools, and workflow management. The cost of technology typically pays for itself within the first year for organisations handling more than 5 DSARs per month.",
    },
    QuestionDef {
        id: "vol-5",
        section_id: "volume",
        text: "Can you estimate the average staff hours spent per DSAR response?",
        guidance: "Understanding your cost per DSAR is essential for making the business case for improvement. The ICO acknowledges that staff time is a legitimate cost consideration. Typical manual DSAR responses in complex organisations take 20-40 hours — technology-assisted responses can reduce this to 2-8 hours.",
        reference: "ICO Right of Access guidance: Cost considerations",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Quick,
        remediation: "Calculate your average staff hours per DSAR. Include: logging, ID verification, data gathering across all systems, review, redaction, response preparation, and quality check. This establishes your baseline for measuring improvement.",
    },
    QuestionDef {
        id: "vol-6",
        section_id: "volume",
        text: "Do you have capacity planning in place for anticipated increases in DSAR volumes (e.g. following a data breach, restructuring, or public controversy)?",
        guidance: "DSAR volumes spike after breaches, media coverage, or organisational changes. The organisations that get reprimanded are typically those that had no plan for volume increases and allowed backlogs to accumulate. Proactive capacity planning is a governance essential.",
        reference: "ICO enforcement patterns",
        weight: 2,
        severity: Severity::Medium,
        effort: Effort::Moderate,
        remediation: "Develop a capacity plan for DSAR volume spikes. Identify triggers (breach notification, media coverage, restructuring), pre-arrange additional resource (internal or outsourced), and document the escalation process.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue_validates() {
        let (sections, questions) = builtin_parts();
        let catalogue = Catalogue::new("check", None, sections, questions)
            .expect("built-in catalogue must satisfy every invariant");
        assert_eq!(catalogue.sections().len(), 7);
        assert_eq!(catalogue.question_count(), 41);
    }

    #[test]
    fn test_builtin_is_never_empty() {
        let catalogue = Catalogue::builtin();
        assert_eq!(catalogue.sections().len(), 7);
        assert_eq!(catalogue.question_count(), 41);
        assert!(catalogue.question("gov-1").is_some());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = Catalogue::builtin();
        let b = Catalogue::builtin();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name(), BUILTIN_CATALOGUE_NAME);
        assert_eq!(a.version(), Some(BUILTIN_CATALOGUE_VERSION));
    }

    #[test]
    fn test_builtin_section_order() {
        let ids: Vec<&str> = Catalogue::builtin()
            .sections()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "governance",
                "recognition",
                "discovery",
                "response",
                "redaction",
                "delivery",
                "volume"
            ]
        );
    }

    #[test]
    fn test_builtin_question_details() {
        let q = Catalogue::builtin().question("res-1").unwrap();
        assert_eq!(q.section_id, "response");
        assert_eq!(q.weight, 3);
        assert_eq!(q.effective_severity(), Severity::Critical);
        assert_eq!(q.effective_effort(), Effort::Quick);
        assert!(!q.reference.is_empty());
    }
}
