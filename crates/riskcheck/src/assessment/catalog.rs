//! Immutable question catalog: modules, areas, questions, and answer options.
//!
//! The catalog is built once ([`Catalog::standard`] for the published
//! checkup) and never mutated at runtime. Points encode risk contribution, so
//! a higher-point option means a worse answer; the worst option of every
//! standard question also carries a trigger flag.

use serde::Serialize;

use super::domain::{AreaId, ModuleId, QuestionId};

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    pub points: u32,
    pub trigger_flag: bool,
}

/// A single catalog question plus the copy shown when it surfaces as a risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub why_it_matters: String,
    pub risk_title: String,
    pub risk_summary: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Highest point value among the question's options.
    pub fn max_points(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.points)
            .max()
            .unwrap_or(0)
    }

    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Named topical grouping of questions within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Area {
    /// Sum of each question's highest-point option; a catalog constant
    /// independent of what was answered.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(Question::max_points).sum()
    }
}

/// Top-level grouping an assessment is created against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    pub areas: Vec<Area>,
}

impl Module {
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.areas.iter().flat_map(|area| area.questions.iter())
    }

    pub fn max_score(&self) -> u32 {
        self.areas.iter().map(Area::max_score).sum()
    }
}

/// Catalog lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("module '{0}' not found")]
    ModuleNotFound(String),
}

/// Process-wide, read-only table of modules. Declaration order is the
/// canonical ordering for every derived list in a score result.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// The published 24-question checkup: six areas of four questions each.
    pub fn standard() -> Self {
        Self::new(vec![standard_module()])
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: &ModuleId) -> Result<&Module, CatalogError> {
        self.modules
            .iter()
            .find(|module| &module.id == id)
            .ok_or_else(|| CatalogError::ModuleNotFound(id.0.clone()))
    }

    /// Ordered questions of a single module.
    pub fn questions(&self, module_id: &ModuleId) -> Result<Vec<&Question>, CatalogError> {
        Ok(self.module(module_id)?.questions().collect())
    }

    /// Concatenation across all modules in declaration order.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.modules.iter().flat_map(Module::questions)
    }

    /// Locate a question together with its owning module and area.
    pub fn find_question(&self, id: &QuestionId) -> Option<QuestionRef<'_>> {
        for module in &self.modules {
            for area in &module.areas {
                for question in &area.questions {
                    if &question.id == id {
                        return Some(QuestionRef {
                            module,
                            area,
                            question,
                        });
                    }
                }
            }
        }
        None
    }
}

/// A question resolved to its position in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct QuestionRef<'a> {
    pub module: &'a Module,
    pub area: &'a Area,
    pub question: &'a Question,
}

fn area(id: &str, name: &str, description: &str, questions: Vec<Question>) -> Area {
    Area {
        id: AreaId(id.to_string()),
        name: name.to_string(),
        description: description.to_string(),
        questions,
    }
}

/// Standard green/yellow/red question: the green answer contributes no risk,
/// the yellow answer a partial amount, and the red answer the maximum plus a
/// trigger flag.
fn question(
    id: &str,
    text: &str,
    why_it_matters: &str,
    risk_title: &str,
    risk_summary: &str,
    labels: [&str; 3],
) -> Question {
    let [green, yellow, red] = labels;
    Question {
        id: QuestionId(id.to_string()),
        text: text.to_string(),
        why_it_matters: why_it_matters.to_string(),
        risk_title: risk_title.to_string(),
        risk_summary: risk_summary.to_string(),
        options: vec![
            AnswerOption {
                value: "green".to_string(),
                label: green.to_string(),
                points: 0,
                trigger_flag: false,
            },
            AnswerOption {
                value: "yellow".to_string(),
                label: yellow.to_string(),
                points: 3,
                trigger_flag: false,
            },
            AnswerOption {
                value: "red".to_string(),
                label: red.to_string(),
                points: 6,
                trigger_flag: true,
            },
        ],
    }
}

fn standard_module() -> Module {
    Module {
        id: ModuleId("clbh".to_string()),
        name: "Core Legal Health Checkup".to_string(),
        areas: vec![
            contracts_area(),
            ownership_area(),
            vendors_area(),
            employment_area(),
            insurance_area(),
            systems_area(),
        ],
    }
}

fn contracts_area() -> Area {
    area(
        "contracts",
        "Customer Contracts & Project Risks",
        "Four questions that reveal whether your client agreements protect you",
        vec![
            question(
                "q1",
                "Do your customer contracts clearly define scope of work, pricing, and payment terms, including what happens if a client pays late?",
                "Vague scope leads to scope creep, and unclear payment terms leave you no leverage when a client delays payment for months.",
                "Vague Contract Terms",
                "Your contracts lack clear scope, pricing, or payment terms, exposing you to disputes and cash flow problems.",
                [
                    "Yes. Every contract specifies exact scope, pricing, payment deadlines, and late payment consequences.",
                    "Most contracts cover this, but some clients are on informal or verbal agreements.",
                    "No. My contracts are vague on scope or payment, or I frequently work without a signed contract.",
                ],
            ),
            question(
                "q2",
                "When a client requests changes mid-project, do you require a written change order before the additional work is performed?",
                "Without a signed approval process you end up doing extra work for free, with no documentation to support a billing dispute.",
                "No Change Order Process",
                "Without documented change orders, you risk doing extra work for free with no billing recourse.",
                [
                    "Yes. All changes go through a formal change order with written approval and updated pricing before work begins.",
                    "Sometimes. Major changes are documented, but smaller requests get handled informally.",
                    "No. We handle changes as they come and figure out billing later.",
                ],
            ),
            question(
                "q3",
                "Do your contracts include a limitation of liability clause that caps your financial exposure if something goes wrong?",
                "Without a liability cap, a single bad project can result in a judgment that exceeds your total revenue.",
                "No Liability Cap",
                "Without a liability cap, a single project could result in a company-ending judgment.",
                [
                    "Yes. My contracts cap liability, typically to the amount paid under the contract.",
                    "There may be something about liability in my contract, but I have not reviewed it closely.",
                    "No. My contracts have no liability cap, or I am not sure.",
                ],
            ),
            question(
                "q4",
                "Are you relying on handshake deals, verbal agreements, or online contract templates that no attorney has reviewed?",
                "Handshake deals offer zero protection in a dispute, and generic templates rarely address your industry or state law.",
                "Relying on Handshake Deals",
                "Verbal agreements and unreviewed templates offer zero legal protection in disputes.",
                [
                    "No. All client relationships are governed by attorney-reviewed written contracts.",
                    "Most clients are under contract, but a few relationships rest on verbal agreements or generic templates.",
                    "Yes. I regularly work on handshake deals or use templates I have not had reviewed.",
                ],
            ),
        ],
    )
}

fn ownership_area() -> Area {
    area(
        "ownership",
        "Ownership & Governance",
        "Four questions that determine if your business can survive a partner dispute, exit, or crisis",
        vec![
            question(
                "q5",
                "Does your business have a current, signed operating or shareholder agreement that all owners have reviewed and agreed to?",
                "Without a written agreement, your state's default rules govern the business, and they were not written with your situation in mind.",
                "No Ownership Agreement",
                "Without a written agreement, state default rules govern your business, often unfavorably.",
                [
                    "Yes. We have a signed, current agreement that all owners understand.",
                    "We have an agreement, but it is outdated or some owners have not reviewed it.",
                    "No. We have no written ownership agreement, or only an uncustomized template.",
                ],
            ),
            question(
                "q6",
                "Does your agreement include buy-sell provisions covering an owner's departure, disability, divorce, or death?",
                "Without buyout provisions, an owner leaving can force dissolution, and a death or divorce can put a stranger on your cap table.",
                "No Buy-Sell Provisions",
                "Missing buyout provisions for death, disability, or departure can force dissolution.",
                [
                    "Yes. Our agreement covers departure, death, disability, and divorce with a clear valuation process.",
                    "We have some buyout language, but it does not cover all scenarios or the valuation method is unclear.",
                    "No. We have no buy-sell provisions, or I do not know if we do.",
                ],
            ),
            question(
                "q7",
                "Is decision-making authority clearly defined, including what requires a vote and what happens if owners deadlock?",
                "When 50/50 partners disagree with no deadlock mechanism, the business can be paralyzed into judicial dissolution.",
                "No Deadlock Resolution",
                "Without clear decision-making rules, partner disagreements can paralyze the business.",
                [
                    "Yes. Our agreement defines day-to-day authority, major decision thresholds, and a deadlock process.",
                    "We have general roles, but major decision authority and deadlock resolution are not documented.",
                    "No. Decision-making is informal, with no process for resolving owner disagreements.",
                ],
            ),
            question(
                "q8",
                "Does your entity structure (LLC, S-Corp, C-Corp, partnership) still match how your business operates today?",
                "A structure that made sense at launch may now be costing you taxes, creating liability exposure, or blocking investors.",
                "Mismatched Entity Structure",
                "Your entity structure may be costing you money or creating liability exposure.",
                [
                    "Yes. We reviewed our entity structure with a professional within the past two years and it still fits.",
                    "It probably still works, but we have not reviewed it since setup.",
                    "I am not sure it is optimal, or the business has changed significantly since we formed.",
                ],
            ),
        ],
    )
}

fn vendors_area() -> Area {
    area(
        "subcontractor",
        "Vendors",
        "Four questions that expose whether your supply chain and contractor relationships are a liability",
        vec![
            question(
                "q9",
                "Are signed subcontractor agreements in place with every subcontractor before they begin work on your projects?",
                "A subcontractor working without a signed agreement exposes you to disputes and to liability for their injuries and mistakes.",
                "No Subcontractor Agreements",
                "Working without signed agreements exposes you to disputes and liability for their actions.",
                [
                    "Yes. Every subcontractor signs a written agreement before any work starts, no exceptions.",
                    "Most do, but we occasionally start work on a verbal agreement and formalize later.",
                    "No. We regularly use subcontractors without signed agreements.",
                ],
            ),
            question(
                "q10",
                "Would your independent contractor classifications survive an IRS or state audit?",
                "Misclassification is aggressively enforced; back taxes, penalties, and class exposure can reach six figures.",
                "Contractor Misclassification Risk",
                "Misclassifying workers can result in six-figure liability in an IRS or state audit.",
                [
                    "Yes. Classifications were reviewed by a legal or tax professional and meet the IRS and state tests.",
                    "I believe they are correct, but we have not had a formal review.",
                    "I am not sure our contractors would pass a classification audit.",
                ],
            ),
            question(
                "q11",
                "Do your subcontractor and vendor agreements include indemnification provisions protecting you from their mistakes?",
                "Without indemnification, you pay the judgment when a subcontractor's work causes injury or damage, with no recovery rights.",
                "No Indemnification Protection",
                "Without indemnification, you pay for others' mistakes with no recovery rights.",
                [
                    "Yes. All subcontractor and key vendor agreements require them to defend and hold us harmless.",
                    "Some agreements have indemnification language, but it is not consistent.",
                    "No. Our agreements do not include indemnification, or I do not know if they do.",
                ],
            ),
            question(
                "q12",
                "Do you collect and verify current certificates of insurance from every subcontractor, and track expiration dates?",
                "An expired certificate is worthless; an uninsured subcontractor's damage becomes your financial responsibility.",
                "Unverified Insurance Coverage",
                "Uninsured subcontractors make you financially responsible for their damages.",
                [
                    "Yes. We collect current COIs before work begins, verify coverage, and track expirations.",
                    "We collect COIs at the start but do not consistently track renewals.",
                    "No. We do not regularly collect or verify subcontractor insurance certificates.",
                ],
            ),
        ],
    )
}

fn employment_area() -> Area {
    area(
        "employment",
        "Employment & Safety Compliance",
        "Four questions that reveal whether your employment practices are a lawsuit waiting to happen",
        vec![
            question(
                "q13",
                "Does your employee handbook reflect your state's employment laws as they exist today?",
                "Employment law changes constantly, and an outdated handbook can work against you by showing policies you failed to keep current.",
                "Outdated Employee Handbook",
                "An outdated or missing handbook can work against you in employment lawsuits.",
                [
                    "Yes. The handbook was reviewed and updated within the past 12 months.",
                    "We have a handbook, but it has not been updated in over a year.",
                    "We do not have a handbook, or ours is significantly outdated.",
                ],
            ),
            question(
                "q14",
                "Are your wage, hour, and overtime practices fully compliant, including exempt versus non-exempt classification?",
                "Wage and hour claims are the most common employment lawsuit, and they often carry double damages plus attorney fees.",
                "Wage & Hour Compliance Risk",
                "Wage misclassification is the most common employment lawsuit, with double damages.",
                [
                    "Yes. Classifications and pay practices were reviewed by an employment professional and are compliant.",
                    "I believe we are compliant, but we have not had a formal review.",
                    "I am not confident our classifications or overtime practices would survive an audit.",
                ],
            ),
            question(
                "q15",
                "Do you have a documented termination process with written performance records and a final review step?",
                "Wrongful termination claims succeed on missing paper trails; defending even a weak claim averages six figures.",
                "No Termination Documentation",
                "Missing documentation makes wrongful termination claims easier to pursue.",
                [
                    "Yes. We have a documented process with written warnings and a final review before termination.",
                    "We try to document things, but the process is inconsistent.",
                    "No. We have no formal termination process, or decisions happen without documentation.",
                ],
            ),
            question(
                "q16",
                "Have your key employees signed confidentiality and non-solicitation agreements?",
                "When a key employee leaves with your client list and pricing, you have little recourse without agreements signed up front.",
                "No Employee Protections",
                "Missing confidentiality agreements leave you vulnerable when key employees leave.",
                [
                    "Yes. All key employees have signed enforceable confidentiality and non-solicitation agreements.",
                    "Some have signed, but coverage is not consistent across key roles.",
                    "No. We have no confidentiality or non-solicitation agreements in place.",
                ],
            ),
        ],
    )
}

fn insurance_area() -> Area {
    area(
        "insurance",
        "Insurance and Risk Management",
        "Four questions that determine whether your insurance will protect you when it matters",
        vec![
            question(
                "q17",
                "Has your business insurance been reviewed in the past 12 months against your current operations and revenue?",
                "Most businesses buy insurance at launch and never update it; the gap shows up only after a claim is filed.",
                "Outdated Insurance Coverage",
                "Your policy may not cover your current operations, revenue, or risk exposure.",
                [
                    "Yes. Coverage was reviewed within the past 12 months and adjusted to current operations.",
                    "We have insurance, but it has not been reviewed against current operations recently.",
                    "No. Coverage has not been reviewed since purchase, or the business has changed significantly.",
                ],
            ),
            question(
                "q18",
                "Do your contract obligations align with what your insurance actually covers?",
                "Promising indemnification your policy excludes means paying the full claim out of pocket when the insurer denies it.",
                "Contract-Insurance Mismatch",
                "You may be contractually promising coverage that your insurance doesn't provide.",
                [
                    "Yes. Our attorney and broker reviewed our contracts together to ensure alignment.",
                    "They probably align, but no one has formally compared obligations to the policy.",
                    "No. I have never compared my contract obligations to my actual coverage.",
                ],
            ),
            question(
                "q19",
                "Do you have a documented incident response procedure for the first 24 hours after an accident or complaint?",
                "The first 24 hours decide whether the insurance claim succeeds and whether legal exposure grows or shrinks.",
                "No Incident Response Plan",
                "Poor incident handling in the first 24 hours can undermine your insurance claim.",
                [
                    "Yes. We have a written incident response procedure that employees are trained on.",
                    "We have an informal understanding, but nothing documented or trained.",
                    "No. We have no incident response procedure.",
                ],
            ),
            question(
                "q20",
                "Have you identified the exclusions, caps, and gaps in your coverage before an emergency?",
                "Every policy has exclusions; discovering them while filing a claim is the most expensive way to learn.",
                "Unknown Coverage Gaps",
                "Policy exclusions and limits you don't know about will hurt you when you file a claim.",
                [
                    "Yes. We have done a coverage gap analysis and addressed the limitations.",
                    "I am aware of some limitations but have not done a comprehensive review.",
                    "No. I do not know what my policy excludes or where the gaps are.",
                ],
            ),
        ],
    )
}

fn systems_area() -> Area {
    area(
        "systems",
        "Systems, Records & Digital Risk",
        "Four questions that reveal whether your business can survive a data breach, audit, or sale",
        vec![
            question(
                "q21",
                "Could you produce your critical business records within 48 hours for an audit, lawsuit, or due diligence request?",
                "Businesses that cannot produce clean documentation quickly lose leverage, face sanctions, and kill deals.",
                "Disorganized Records",
                "You cannot produce key documents quickly for audits, lawsuits, or due diligence.",
                [
                    "Yes. Records are organized, digitized, and producible within 48 hours.",
                    "Most records exist, but they are scattered and would take time to compile.",
                    "No. Records are disorganized or incomplete.",
                ],
            ),
            question(
                "q22",
                "Do your data security and privacy practices meet the standards for your industry?",
                "Breach notification laws exist in all 50 states; a single breach can close a small business permanently.",
                "Inadequate Data Security",
                "A data breach without proper security can close your business permanently.",
                [
                    "Yes. Documented practices, reviewed for compliance with applicable laws.",
                    "Some measures are in place, but they have not been formally reviewed.",
                    "No. We have no documented data security practices, or I am not sure of our obligations.",
                ],
            ),
            question(
                "q23",
                "Do access controls restrict who can view, edit, or download sensitive business information?",
                "Most internal breaches happen because everyone has access to everything; controls contain the damage.",
                "No Access Controls",
                "Everyone having access to everything maximizes damage potential from any breach.",
                [
                    "Yes. Role-based access controls limit who can view and download sensitive data.",
                    "Some restrictions exist, but most people can access most systems.",
                    "No. Everyone in the company has access to essentially everything.",
                ],
            ),
            question(
                "q24",
                "If your business were sold or sued tomorrow, could you produce complete corporate records within two weeks?",
                "Buyers walk away and judges penalize when documentation is incomplete; this tests the health of your records system.",
                "Not Due Diligence Ready",
                "Incomplete records can kill deals, lose lawsuits, and invite regulatory problems.",
                [
                    "Yes. We could be due diligence ready within two weeks.",
                    "We could pull most of it together, but it would be a scramble.",
                    "No. We are not close to prepared for a major document production request.",
                ],
            ),
        ],
    )
}
